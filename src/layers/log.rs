use std::{sync::Arc, time::Duration};

use axum::{Extension, middleware::AddExtension};
use mongodb::Client;
use tower::Layer;

use crate::repositories::log::{LogRepo, MongoLogRepo};

#[derive(Clone)]
pub struct LogRepoLayer(pub LogRepo);

impl LogRepoLayer {
    pub fn mongo(
        client: &Client,
        database: &str,
        collection: &str,
        op_timeout: Duration,
    ) -> Self {
        Self(Arc::new(MongoLogRepo::new(
            client, database, collection, op_timeout,
        )))
    }
}

impl<S> Layer<S> for LogRepoLayer {
    type Service = AddExtension<S, LogRepo>;

    fn layer(&self, inner: S) -> Self::Service {
        Extension(self.0.clone()).layer(inner)
    }
}
