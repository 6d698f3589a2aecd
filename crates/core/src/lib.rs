pub mod domain;
pub mod error;
pub mod lexicon;
pub mod scoring;

pub use domain::recommendation::{Label, Recommendation, RecommendationDetails, StockMetrics};
pub use error::InvalidInputError;
pub use lexicon::Lexicon;
pub use scoring::Scorer;

pub mod config {
    use crate::lexicon::Lexicon;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub lexicon_path: Option<PathBuf>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                lexicon_path: non_empty_var("SENTISCORE_LEXICON_PATH").map(PathBuf::from),
            })
        }

        /// Custom table from `lexicon_path` when set, the builtin table otherwise.
        pub fn load_lexicon(&self) -> anyhow::Result<Lexicon> {
            match self.lexicon_path.as_deref() {
                Some(path) => load_from(path),
                None => Ok(Lexicon::builtin()),
            }
        }
    }

    fn load_from(path: &Path) -> anyhow::Result<Lexicon> {
        let lexicon = Lexicon::from_path(path)?;
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded custom lexicon");
        Ok(lexicon)
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

}
