use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hangman_server_app::domain::GameId;

use crate::ServiceError;

const KEY_PREFIX: &str = "Game:";

/// Opaque, url-safe handle for a game that clients pass back in paths.
pub fn encode_game_key(game_id: GameId) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}{}", KEY_PREFIX, game_id))
}

pub fn decode_game_key(key: &str) -> Option<GameId> {
    let bytes = URL_SAFE_NO_PAD.decode(key.trim_end_matches('=')).ok()?;
    let text = String::from_utf8(bytes).ok()?;
    let id = text.strip_prefix(KEY_PREFIX)?.parse::<i32>().ok()?;
    Some(GameId(id))
}

pub fn parse_game_key(key: &str) -> Result<GameId, ServiceError> {
    decode_game_key(key).ok_or_else(|| ServiceError::BadRequest("Invalid game key".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_key() {
        let key = encode_game_key(GameId(42));
        assert_eq!(key, "R2FtZTo0Mg");
        assert!(!key.contains(['+', '/', '=']));
        assert_eq!(decode_game_key(&key), Some(GameId(42)));
    }

    #[test]
    fn test_invalid_game_keys() {
        assert_eq!(decode_game_key(""), None);
        assert_eq!(decode_game_key("not base64!"), None);
        // "User:1"
        assert_eq!(decode_game_key("VXNlcjox"), None);
        // "Game:abc"
        assert_eq!(decode_game_key("R2FtZTphYmM"), None);
        assert!(matches!(
            parse_game_key("???"),
            Err(ServiceError::BadRequest(_))
        ));
    }
}
