use std::sync::{Arc, Mutex};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::AppConfig;

/// The shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Random source for quiz draws. Locked only for the pick itself.
    pub rng: Arc<Mutex<ChaCha8Rng>>,
}

impl AppState {
    /// Creates the state, seeding the quiz RNG from `quiz.seed` when set.
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        let rng = match config.quiz.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::with_rng(db, config, rng)
    }

    pub fn with_rng(db: sqlx::SqlitePool, config: AppConfig, rng: ChaCha8Rng) -> Self {
        Self {
            db,
            config: Arc::new(config),
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
