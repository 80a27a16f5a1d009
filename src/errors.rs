use thiserror::Error;

pub type MaraiResult<T> = Result<T, MaraiError>;

#[derive(Debug, Error)]
pub enum MaraiError {
    #[error("webhook error: {0}")]
    Api(String),

    #[error("reply parse error: {0}")]
    Parse(String),

    #[error("config error: {0}")]
    Config(String),
}

impl MaraiError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        MaraiError::Api(msg.into())
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        MaraiError::Parse(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        MaraiError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        assert_eq!(
            MaraiError::api_error("boom").to_string(),
            "webhook error: boom"
        );
        assert_eq!(
            MaraiError::parse_error("bad").to_string(),
            "reply parse error: bad"
        );
        assert_eq!(
            MaraiError::config_error("no url").to_string(),
            "config error: no url"
        );
    }
}
