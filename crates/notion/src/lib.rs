//! Notion gateway.
//!
//! Implements the engine's [`UserRepository`] over the Notion REST API:
//! one roster database listing everyone to evaluate, one ledger database
//! per person, and a shared ledger for purchases made on behalf of others.

use async_trait::async_trait;
use engine::{Currency, Money, StoreError, User, UserRepository};
use reqwest::{Client, header};
use serde_json::{Value, json};

use wire::{Page, QueryResponse};

mod wire;

const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

// Roster database properties.
const PROP_TELEGRAM_ID: &str = "telegram_id";
const PROP_NAME: &str = "name";
const PROP_LEDGER_ID: &str = "ledger_id";
const PROP_CURRENCY: &str = "currency";

// Ledger database properties. Amounts live in one number column per
// currency, named by its code.
const PROP_STATUS: &str = "payment_status";
const STATUS_UNPAID: &str = "unpaid";
const PROP_BUYER: &str = "buyer";

/// [`UserRepository`] backed by the Notion API.
#[derive(Clone, Debug)]
pub struct Repository {
    client: Client,
    base_url: String,
    users_db: String,
    shared_ledger_db: String,
}

impl Repository {
    /// Builds a client with the integration token baked into the default
    /// headers.
    pub fn new(token: &str, users_db: &str, shared_ledger_db: &str) -> Result<Self, String> {
        let mut auth = header::HeaderValue::try_from(format!("Bearer {token}"))
            .map_err(|err| format!("invalid auth header value: {err}"))?;
        auth.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|err| format!("failed to build http client: {err}"))?;

        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            users_db: users_db.to_string(),
            shared_ledger_db: shared_ledger_db.to_string(),
        })
    }

    /// Points the client at a different API root (tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn query_database(
        &self,
        database_id: &str,
        body: &Value,
    ) -> Result<QueryResponse, StoreError> {
        let url = format!("{}/v1/databases/{database_id}/query", self.base_url);

        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| StoreError::Query(format!("notion request failed: {err}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Query(format!("notion query failed: {status}")));
        }

        resp.json::<QueryResponse>()
            .await
            .map_err(|err| StoreError::Query(format!("notion response decode failed: {err}")))
    }

    async fn sum_unpaid(
        &self,
        database_id: &str,
        filter: Value,
        currency: Currency,
    ) -> Result<Money, StoreError> {
        let res = self
            .query_database(database_id, &json!({ "filter": filter }))
            .await?;

        let mut total = Money::ZERO;
        for page in &res.results {
            let amount = page.number(currency.code())?;
            total += Money::from_major_f64(amount, currency);
        }

        Ok(total)
    }
}

#[async_trait]
impl UserRepository for Repository {
    async fn users(&self) -> Result<Vec<User>, StoreError> {
        let res = self.query_database(&self.users_db, &json!({})).await?;

        let mut users = Vec::with_capacity(res.results.len());
        for page in &res.results {
            users.push(parse_user(page)?);
        }

        Ok(users)
    }

    async fn unpaid_amount(
        &self,
        ledger_id: &str,
        currency: Currency,
    ) -> Result<Money, StoreError> {
        let filter = json!({
            "property": PROP_STATUS,
            "select": { "equals": STATUS_UNPAID },
        });

        self.sum_unpaid(ledger_id, filter, currency).await
    }

    async fn shared_unpaid_amount(
        &self,
        buyer: &str,
        currency: Currency,
    ) -> Result<Money, StoreError> {
        let filter = json!({
            "and": [
                { "property": PROP_BUYER, "select": { "equals": buyer } },
                { "property": PROP_STATUS, "select": { "equals": STATUS_UNPAID } },
            ],
        });

        self.sum_unpaid(&self.shared_ledger_db, filter, currency).await
    }
}

fn parse_user(page: &Page) -> Result<User, StoreError> {
    let telegram_id = page.title(PROP_TELEGRAM_ID)?;
    let name = page.rich_text(PROP_NAME)?;
    let ledger_id = page.rich_text(PROP_LEDGER_ID)?;
    let currency = Currency::try_from(page.select(PROP_CURRENCY)?.as_str())?;

    Ok(User {
        telegram_id,
        name,
        ledger_id,
        currency,
    })
}
