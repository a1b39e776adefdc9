use async_trait::async_trait;
use rspotify::{
    clients::OAuthClient,
    http::HttpError,
    model::{PlayableId, TrackId},
    scopes, AuthCodeSpotify, ClientError, Config, Credentials, OAuth,
};

use crate::playback::{PlaybackClient, PlaybackError};

/// Builds an authenticated Spotify session from `RSPOTIFY_CLIENT_ID`,
/// `RSPOTIFY_CLIENT_SECRET` and `RSPOTIFY_REDIRECT_URI`. Token caching and
/// refreshing are handled by rspotify; the first run walks the user through
/// the authorize URL.
pub async fn init() -> anyhow::Result<AuthCodeSpotify> {
    let creds = Credentials::from_env()
        .ok_or_else(|| anyhow::anyhow!("Missing RSPOTIFY_CLIENT_ID or RSPOTIFY_CLIENT_SECRET"))?;
    let oauth = OAuth::from_env(scopes!(
        "user-read-playback-state",
        "user-modify-playback-state"
    ))
    .ok_or_else(|| anyhow::anyhow!("Missing RSPOTIFY_REDIRECT_URI"))?;
    let spotify = AuthCodeSpotify::with_config(
        creds,
        oauth,
        Config {
            token_cached: true,
            ..Default::default()
        },
    );
    let url = spotify.get_authorize_url(false)?;
    spotify.prompt_for_token(&url).await?;
    Ok(spotify)
}

#[async_trait]
impl PlaybackClient for AuthCodeSpotify {
    async fn has_available_device(&self) -> Result<bool, PlaybackError> {
        let devices = self.device().await.map_err(classify)?;
        Ok(!devices.is_empty())
    }

    async fn start_track(&self, track: TrackId<'static>) -> Result<(), PlaybackError> {
        self.start_uris_playback([PlayableId::Track(track)], None, None, None)
            .await
            .map_err(classify)
    }
}

/// Sorts an rspotify error into the two-way playback taxonomy: an error
/// status from the Web API is an explicit rejection, everything else
/// (transport, token, cache, parse) is unclassified.
fn classify(err: ClientError) -> PlaybackError {
    match err {
        ClientError::Http(http) => match *http {
            HttpError::StatusCode(response) => {
                PlaybackError::Rejected(format!("status code {}", response.status()))
            }
            other => PlaybackError::Other(anyhow::Error::new(other)),
        },
        other => PlaybackError::Other(anyhow::Error::new(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ClientError {
        let response = http::Response::builder().status(status).body("").unwrap();
        ClientError::Http(Box::new(HttpError::StatusCode(response.into())))
    }

    #[test]
    fn error_status_is_a_rejection() {
        // 404 is what the API returns for NO_ACTIVE_DEVICE
        match classify(status_error(404)) {
            PlaybackError::Rejected(reason) => assert!(reason.contains("404")),
            other => panic!("expected a rejection, got {other:?}"),
        }
    }

    #[test]
    fn forbidden_is_a_rejection() {
        assert!(matches!(
            classify(status_error(403)),
            PlaybackError::Rejected(_)
        ));
    }

    #[test]
    fn invalid_token_is_unclassified() {
        assert!(matches!(
            classify(ClientError::InvalidToken),
            PlaybackError::Other(_)
        ));
    }

    #[test]
    fn cache_fault_is_unclassified() {
        let err = ClientError::CacheFile("token cache unreadable".to_string());
        assert!(matches!(classify(err), PlaybackError::Other(_)));
    }
}
