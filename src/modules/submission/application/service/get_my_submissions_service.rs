use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::policy::Caller;
use crate::shared::pagination::{PageRequest, PageResult};
use crate::submission::application::domain::entities::SubmissionView;
use crate::submission::application::ports::incoming::use_cases::{
    GetMySubmissionsError, GetMySubmissionsUseCase,
};
use crate::submission::application::ports::outgoing::{SubmissionListFilter, SubmissionQuery};

pub struct GetMySubmissionsService {
    query: Arc<dyn SubmissionQuery>,
}

impl GetMySubmissionsService {
    pub fn new(query: Arc<dyn SubmissionQuery>) -> Self {
        Self { query }
    }
}

#[async_trait]
impl GetMySubmissionsUseCase for GetMySubmissionsService {
    async fn execute(
        &self,
        caller: Caller,
        page: PageRequest,
    ) -> Result<PageResult<SubmissionView>, GetMySubmissionsError> {
        let filter = SubmissionListFilter {
            student_id: Some(caller.user_id),
            ..Default::default()
        };

        Ok(self.query.list(filter, page).await?)
    }
}
