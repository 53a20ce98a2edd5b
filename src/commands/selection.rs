//! Resolution of the flags shared by `generate` and `preview`.

use crate::cli::SelectionArgs;
use crate::config::Config;
use crate::context::ProjectContext;
use crate::error::Result;
use crate::vehicle::VehicleCategory;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

impl SelectionArgs {
    /// The run date: `--date` when given, else today's date in `timezone`.
    pub fn run_date(&self, timezone: Tz) -> NaiveDate {
        self.date.unwrap_or_else(|| date_in(timezone, Utc::now()))
    }

    /// Seeded generator when `--seed` is given, else one seeded from the OS.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Category override, or date parity.
    pub fn category(&self, date: NaiveDate) -> VehicleCategory {
        self.category.unwrap_or_else(|| VehicleCategory::for_date(date))
    }

    pub fn project(&self) -> Result<ProjectContext> {
        ProjectContext::resolve_optional(self.root.as_deref())
    }

    /// Project config with the environment folded in; `--future` wins over both.
    pub fn config<F>(&self, ctx: &ProjectContext, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::load_or_default(ctx.config_path())?.apply_env(lookup);
        if self.future {
            config.future_mode = true;
        }
        debug!(
            future_mode = config.future_mode,
            "config resolved from {}",
            ctx.config_path().display()
        );
        Ok(config)
    }
}

fn date_in(timezone: Tz, instant: DateTime<Utc>) -> NaiveDate {
    instant.with_timezone(&timezone).date_naive()
}
