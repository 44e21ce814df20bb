//! Game server entry points.

use std::sync::Arc;

use wonders::{ConnectionListener, HandlerFactory, ListenerBuilder};

use crate::{GameConfig, GameError, GameSession, Wordlist};

/// Creates one [`GameSession`] per connection from the shared word list
/// and configuration.
#[derive(Debug, Clone)]
pub struct GameSessionFactory {
    wordlist: Arc<Wordlist>,
    config: GameConfig,
}

impl GameSessionFactory {
    pub fn new(wordlist: Arc<Wordlist>, config: GameConfig) -> Self {
        Self { wordlist, config }
    }
}

impl HandlerFactory for GameSessionFactory {
    type Handler = GameSession;

    fn create(&self) -> GameSession {
        GameSession::new(Arc::clone(&self.wordlist), self.config)
    }
}

/// Binds a listener whose connections each play a [`GameSession`].
///
/// The configuration is validated before anything is bound.
pub async fn bind_server(
    addr: &str,
    wordlist: Arc<Wordlist>,
    config: GameConfig,
) -> Result<ConnectionListener<GameSessionFactory>, GameError> {
    config.validate()?;

    tracing::info!(
        words = wordlist.len(),
        attempts = config.attempts,
        "starting Field of Wonders server"
    );

    let listener = ListenerBuilder::new()
        .bind(addr)
        .build(GameSessionFactory::new(wordlist, config))
        .await?;
    Ok(listener)
}

/// Binds to `addr` and serves games until the process is terminated.
pub async fn run_server(
    addr: &str,
    wordlist: Arc<Wordlist>,
    config: GameConfig,
) -> Result<(), GameError> {
    bind_server(addr, wordlist, config).await?.run().await?;
    Ok(())
}
