use crate::{
    error::{ChartError, Result},
    http,
    session::Session,
    spotify::SpotifyClient,
    types::UserProfile,
};

impl SpotifyClient {
    /// Profile of the user owning `access_token`.
    pub async fn current_user(&self, access_token: &str) -> Result<UserProfile> {
        let api_url = format!("{url}/me", url = self.api_url);
        let request = self.http.get(&api_url).bearer_auth(access_token);

        let response = http::check_status(http::send(request).await?, "user profile").await?;
        Ok(response.json::<UserProfile>().await?)
    }

    /// Session for `access_token`, resolving the user it belongs to.
    ///
    /// A rejected token yields [`Session::NotAuthenticated`] instead of an
    /// error; transport failures are still reported.
    pub async fn session(&self, access_token: &str) -> Result<Session> {
        match self.current_user(access_token).await {
            Ok(profile) => Ok(Session::authenticated(profile.id, access_token)),
            Err(ChartError::AuthMissing) => Ok(Session::NotAuthenticated),
            Err(e) => Err(e),
        }
    }
}
