use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};

use crate::{
    config::StoreConfig,
    error::Result,
    http,
    session::Session,
    store::{ChartStore, RANKING_COLLECTION, TRACK_INFO_COLLECTION},
    types::{
        AnonymousLoginResponse, ChartDate, FindOneRequest, FindOneResponse, RankingDocument,
        TrackInfoDocument,
    },
};

/// Chart store reached through the document data HTTP API.
pub struct DataApiStore {
    http: Client,
    config: StoreConfig,
}

impl DataApiStore {
    pub fn new(config: StoreConfig) -> Result<Self> {
        Ok(Self {
            http: http::build_client()?,
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(StoreConfig::from_env())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    async fn find_one<T: DeserializeOwned>(
        &self,
        session: &Session,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>> {
        let identity = session.identity()?;
        let api_url = format!(
            "{url}/action/findOne",
            url = self.config.data_url.trim_end_matches('/')
        );
        let body = FindOneRequest {
            data_source: &self.config.data_source,
            database: &self.config.database,
            collection,
            filter: json!({ "_id": id }),
            projection: json!({ "_id": 0 }),
        };

        debug!(collection, id, "looking up document");
        let request = self
            .http
            .post(&api_url)
            .bearer_auth(&identity.access_token)
            .json(&body);
        let response = http::send(request).await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = http::check_status(response, collection).await?;
        let found = response.json::<FindOneResponse<T>>().await?;
        Ok(found.document)
    }
}

#[async_trait]
impl ChartStore for DataApiStore {
    async fn login(&self) -> Result<Session> {
        let api_url = format!(
            "{url}/app/{app_id}/auth/providers/anon-user/login",
            url = self.config.auth_url.trim_end_matches('/'),
            app_id = self.config.app_id
        );

        let response = http::send(self.http.post(&api_url).json(&json!({}))).await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "anonymous login rejected");
            return Ok(Session::NotAuthenticated);
        }

        let login = response.json::<AnonymousLoginResponse>().await?;
        debug!(user_id = %login.user_id, "logged in to chart store");
        Ok(Session::authenticated(login.user_id, login.access_token))
    }

    async fn find_ranking(
        &self,
        session: &Session,
        date: ChartDate,
    ) -> Result<Option<RankingDocument>> {
        self.find_one(session, RANKING_COLLECTION, &date.key()).await
    }

    async fn find_track_info(
        &self,
        session: &Session,
        uri: &str,
    ) -> Result<Option<TrackInfoDocument>> {
        self.find_one(session, TRACK_INFO_COLLECTION, uri).await
    }
}
