use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::policy::Caller;
use crate::notification::application::domain::entities::NotificationView;
use crate::notification::application::ports::incoming::use_cases::{
    ListNotificationsError, ListNotificationsUseCase, NotificationFeed,
};
use crate::notification::application::ports::outgoing::NotificationQuery;
use crate::shared::pagination::PageRequest;

pub struct ListNotificationsService {
    query: Arc<dyn NotificationQuery>,
}

impl ListNotificationsService {
    pub fn new(query: Arc<dyn NotificationQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ListNotificationsUseCase for ListNotificationsService {
    async fn execute(
        &self,
        caller: Caller,
        unread_only: bool,
        page: PageRequest,
    ) -> Result<NotificationFeed, ListNotificationsError> {
        let result = self
            .query
            .list_for_user(caller.user_id, unread_only, page)
            .await?;
        let unread_count = self.query.unread_count(caller.user_id).await?;

        let now = Utc::now();
        Ok(NotificationFeed {
            page: result.map(|n| NotificationView::new(n, now)),
            unread_count,
        })
    }
}
