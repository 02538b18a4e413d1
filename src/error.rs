use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListenError {
    #[error("bind error: {0}")]
    Bind(std::io::Error),

    #[error("receive error: {0}")]
    Recv(std::io::Error),

    #[error("config error: {0}")]
    Config(String),
}
