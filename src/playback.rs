use async_trait::async_trait;
use rspotify::model::TrackId;

/// How one playback attempt ended, as reported on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Started,
    Rejected,
    Failed,
}

impl Outcome {
    pub fn code(self) -> i32 {
        match self {
            Outcome::Started => 0,
            Outcome::Rejected => -1,
            Outcome::Failed => -2,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Spotify's API explicitly refused the request, or a precondition
    /// (addressable track, available device) makes it unserviceable.
    #[error("playback rejected: {0}")]
    Rejected(String),
    /// Transport, token, parse or any other fault.
    #[error(transparent)]
    Other(anyhow::Error),
}

/// The one Spotify capability this tool needs, kept behind a trait so
/// tests can substitute a fake client.
#[async_trait]
pub trait PlaybackClient {
    async fn has_available_device(&self) -> Result<bool, PlaybackError>;
    async fn start_track(&self, track: TrackId<'static>) -> Result<(), PlaybackError>;
}

/// Issues a single start-playback request for `uri` on the user's active
/// device. All failures are absorbed into the returned [`Outcome`]; detail
/// goes to the log only.
///
/// Not idempotent: invoking twice with the same URI may restart the track
/// or be a no-op depending on remote playback state.
pub async fn play_track(client: &impl PlaybackClient, uri: &str) -> Outcome {
    // A reference the client can't address is observably the same as a
    // remote rejection, so it shares the -1 code and skips the request.
    let track = match TrackId::from_uri(uri) {
        Ok(track) => track.into_static(),
        Err(e) => {
            log::warn!("Not a playable track reference `{uri}`: {e}");
            return Outcome::Rejected;
        }
    };
    match start_on_available_device(client, track).await {
        Ok(()) => Outcome::Started,
        Err(PlaybackError::Rejected(reason)) => {
            log::warn!("Spotify rejected playback of `{uri}`: {reason}");
            Outcome::Rejected
        }
        Err(PlaybackError::Other(e)) => {
            log::error!("Playback of `{uri}` failed: {e:#}");
            Outcome::Failed
        }
    }
}

async fn start_on_available_device(
    client: &impl PlaybackClient,
    track: TrackId<'static>,
) -> Result<(), PlaybackError> {
    if !client.has_available_device().await? {
        return Err(PlaybackError::Rejected(
            "no Spotify device available for playback".to_string(),
        ));
    }
    client.start_track(track).await
}
