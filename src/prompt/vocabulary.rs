//! Fixed phrase sets the prompt builder draws from.

pub const PAINTS: [&str; 6] = [
    "metallic silver-blue paint with contrasting dark accents",
    "deep graphite satin paint with copper pinstripe accents",
    "pearlescent white paint with smoked glass accents",
    "liquid bronze paint with gloss black lower body",
    "midnight teal metallic paint with brushed titanium trim",
    "crimson candy paint with carbon fiber accents",
];

pub const BACKDROPS: [&str; 5] = [
    "modern minimal background, urban concrete wall with soft daylight",
    "contemporary city plaza at dusk, soft diffused light",
    "coastal cliff road at golden hour, gentle haze",
    "architectural glass pavilion, overcast daylight",
    "desert salt flat at sunrise, long soft shadows",
];

pub const WHEELS: [&str; 4] = [
    "large turbine-inspired wheels",
    "aero-covered multi-spoke wheels",
    "split five-spoke forged wheels",
    "flush disc wheels with illuminated rims",
];

pub const INTERIOR_FRAMINGS: [&str; 2] = [
    "cockpit close-up from driver's seat",
    "interior seen from outside through the open driver door, left side",
];

pub const INTERIOR_MATERIALS: &str = "vegan leather, basalt fiber inlays, brushed metal";

pub const INTERIOR_UI: &str = "wide AR HUD, curved panoramic display";

pub const FUTURE_CLAUSE: &str = "set in the 2040s, speculative futuristic aesthetic, \
     light-emitting body seams, near-seamless glazing";

pub const FRONT_HINT: &str = "(distinctive LED signature, unique grille pattern, no badges)";

pub const REAR_HINT: &str = "(unique taillight contour, no brand marks)";
