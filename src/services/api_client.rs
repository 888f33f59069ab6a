// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// One request per call: no retries, no backoff. Errors go back to the caller.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::join_url;
use crate::models::*;
use crate::services::error::{server_error, ApiError};

/// Header carrying the session token
pub const AUTH_HEADER: &str = "Authentication-Token";

#[derive(Clone, PartialEq, Debug)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.token.as_deref().ok_or(ApiError::Unauthenticated)?;
        Ok(builder.header(AUTH_HEADER, token))
    }

    // ------------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------------

    async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let url = request.url();
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let err = Self::error_from(response).await;
            log::warn!("⚠️ {} failed: {:?}", url, err);
            return Err(err);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.text().await.unwrap_or_default();
        server_error(status, &status_text, &body)
    }

    async fn get<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let request = builder.build().map_err(|e| ApiError::Request(e.to_string()))?;
        Self::send(request).await
    }

    async fn with_body<B: Serialize, T: DeserializeOwned>(builder: RequestBuilder, body: &B) -> Result<T, ApiError> {
        let request = builder.json(body).map_err(|e| ApiError::Request(e.to_string()))?;
        Self::send(request).await
    }

    // ------------------------------------------------------------------------
    // System
    // ------------------------------------------------------------------------

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        Self::get(Request::get(&self.url("/api/health"))).await
    }

    pub async fn stats(&self) -> Result<SystemStats, ApiError> {
        Self::get(Request::get(&self.url("/api/stats"))).await
    }

    /// One-time creation of the first admin account
    pub async fn init_admin(&self, request: &InitAdminRequest) -> Result<CreatedUserResponse, ApiError> {
        Self::with_body(Request::post(&self.url("/api/init-admin")), request).await
    }

    // ------------------------------------------------------------------------
    // Auth + profile
    // ------------------------------------------------------------------------

    pub async fn register(&self, request: &RegisterRequest) -> Result<CreatedUserResponse, ApiError> {
        log::info!("📝 Registering {}", request.email);
        Self::with_body(Request::post(&self.url("/api/register")), request).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 Signing in {}", email);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        Self::with_body(Request::post(&self.url("/api/login")), &body).await
    }

    pub async fn me(&self) -> Result<Profile, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/me")))?).await
    }

    pub async fn profile(&self) -> Result<Profile, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/profile")))?).await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<MessageResponse, ApiError> {
        Self::with_body(self.authed(Request::put(&self.url("/api/profile")))?, update).await
    }

    // ------------------------------------------------------------------------
    // Plans
    // ------------------------------------------------------------------------

    pub async fn plans(&self) -> Result<Vec<Plan>, ApiError> {
        Self::get(Request::get(&self.url("/api/plans"))).await
    }

    pub async fn admin_plans(&self) -> Result<Vec<Plan>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/plans")))?).await
    }

    pub async fn create_plan(&self, draft: &PlanDraft) -> Result<CreatedPlanResponse, ApiError> {
        Self::with_body(self.authed(Request::post(&self.url("/api/admin/plans")))?, draft).await
    }

    pub async fn update_plan(&self, plan_id: i64, update: &PlanUpdate) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/api/admin/plans/{}", plan_id));
        Self::with_body(self.authed(Request::put(&url))?, update).await
    }

    /// Soft delete: the plan is deactivated, not removed
    pub async fn delete_plan(&self, plan_id: i64) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/api/admin/plans/{}", plan_id));
        Self::get(self.authed(Request::delete(&url))?).await
    }

    // ------------------------------------------------------------------------
    // Payments
    // ------------------------------------------------------------------------

    pub async fn submit_payment(&self, payment: &PaymentSubmission) -> Result<SubmittedPayment, ApiError> {
        log::info!("💳 Submitting {} payment for plan {}", payment.payment_method.as_str(), payment.plan_id);
        Self::with_body(self.authed(Request::post(&self.url("/api/payments/submit")))?, payment).await
    }

    pub async fn payment_history(&self) -> Result<Vec<PaymentRecord>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/payments/history")))?).await
    }

    pub async fn pending_payments(&self) -> Result<Vec<PendingPayment>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/payments/pending")))?).await
    }

    /// Approves the payment and activates or extends the member's membership
    pub async fn approve_payment(&self, payment_id: i64) -> Result<MembershipGranted, ApiError> {
        let url = self.url(&format!("/api/admin/payments/{}/approve", payment_id));
        Self::get(self.authed(Request::post(&url))?).await
    }

    pub async fn reject_payment(&self, payment_id: i64) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/api/admin/payments/{}/reject", payment_id));
        Self::get(self.authed(Request::post(&url))?).await
    }

    /// Approved payments, optionally bounded by date (admin + manager)
    pub async fn all_transactions(&self, window: &DateWindow) -> Result<TransactionReport, ApiError> {
        let builder = Request::get(&self.url("/api/admin/transactions/all")).query(window.as_query());
        Self::get(self.authed(builder)?).await
    }

    pub async fn transactions(&self, range: &TransactionRange) -> Result<TransactionReport, ApiError> {
        let builder = Request::get(&self.url("/api/admin/transactions")).query(range.as_query());
        Self::get(self.authed(builder)?).await
    }

    // ------------------------------------------------------------------------
    // Memberships + reporting
    // ------------------------------------------------------------------------

    pub async fn priority_list(&self) -> Result<Vec<PriorityEntry>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/priority-list")))?).await
    }

    pub async fn expired_members(&self) -> Result<Vec<ExpiredMember>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/expired-members")))?).await
    }

    /// Manual renewal, recorded server-side as an approved cash payment
    pub async fn renew_membership(&self, user_id: i64, plan_id: i64) -> Result<MembershipGranted, ApiError> {
        let url = self.url(&format!("/api/admin/memberships/{}/renew", user_id));
        Self::with_body(self.authed(Request::post(&url))?, &RenewalRequest { plan_id }).await
    }

    pub async fn projections(&self) -> Result<Projections, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/projections")))?).await
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    pub async fn members(&self, filters: &MemberFilters) -> Result<MemberList, ApiError> {
        let builder = Request::get(&self.url("/api/admin/members")).query(filters.as_query());
        Self::get(self.authed(builder)?).await
    }

    pub async fn user_details(&self, user_id: i64) -> Result<UserDetails, ApiError> {
        let url = self.url(&format!("/api/admin/users/{}", user_id));
        Self::get(self.authed(Request::get(&url))?).await
    }

    pub async fn update_user(&self, user_id: i64, update: &AdminUserUpdate) -> Result<MessageResponse, ApiError> {
        let url = self.url(&format!("/api/admin/users/{}", user_id));
        Self::with_body(self.authed(Request::put(&url))?, update).await
    }

    pub async fn create_manager(&self, request: &RegisterRequest) -> Result<CreatedUserResponse, ApiError> {
        Self::with_body(self.authed(Request::post(&self.url("/api/admin/managers")))?, request).await
    }

    pub async fn managers(&self) -> Result<Vec<ManagerSummary>, ApiError> {
        Self::get(self.authed(Request::get(&self.url("/api/admin/managers")))?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_configured_base() {
        let client = ApiClient::new("https://api.example.com/");
        assert_eq!(client.url("/api/plans"), "https://api.example.com/api/plans");
        assert_eq!(client.base_url(), "https://api.example.com/");
    }

    #[test]
    fn token_is_attached_by_with_token() {
        let client = ApiClient::new("http://localhost:5000").with_token(Some("tok".into()));
        assert_eq!(client.token.as_deref(), Some("tok"));

        let anonymous = client.clone().with_token(None);
        assert_eq!(anonymous.token, None);
        assert_ne!(client, anonymous);
    }
}
