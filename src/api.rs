// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregate::Category;
use crate::currency::RateTable;
use crate::models::{Budget, Currency, Expense, ExpenseKind, Goal, Institution};
use crate::utils::http_client;

/// Typed failure for backend interaction. No retries anywhere: a failed call
/// is terminal for that user action.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend error {code}: {detail}")]
    Backend { code: String, detail: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Backend error-code -> user-facing (title, message) pairs.
static ERROR_MESSAGES: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| {
        HashMap::from([
            (
                "expense_not_found",
                ("Expense not found", "That expense no longer exists."),
            ),
            (
                "goal_not_found",
                ("Goal not found", "That goal no longer exists."),
            ),
            (
                "validation_error",
                ("Invalid data", "One or more fields are invalid."),
            ),
            (
                "unauthorized",
                ("Session expired", "Please sign in again."),
            ),
            (
                "rate_limited",
                ("Too many requests", "Please wait a moment and try again."),
            ),
            (
                "integration_unavailable",
                (
                    "Bank connection unavailable",
                    "The aggregation service is not reachable right now.",
                ),
            ),
        ])
    });

/// Look up the user-facing title and message for a backend error code.
/// Unmapped codes get the generic pair.
pub fn user_message(code: &str) -> (&'static str, &'static str) {
    ERROR_MESSAGES
        .get(code)
        .copied()
        .unwrap_or(("Unexpected error", "Something went wrong. Please try again."))
}

static VALIDATION_DETAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([A-Za-z0-9_.]+)\s*:\s*(.+)$").expect("static pattern"));

/// Split a backend validation detail of the form `field: message`.
pub fn parse_validation_detail(detail: &str) -> Option<(String, String)> {
    let caps = VALIDATION_DETAIL.captures(detail)?;
    Some((caps[1].to_string(), caps[2].trim().to_string()))
}

#[derive(Debug, Default, Deserialize)]
struct BackendErrorBody {
    code: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrenciesResponse {
    currencies: HashMap<String, Currency>,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
    #[allow(dead_code)]
    base_currency: Option<String>,
    #[allow(dead_code)]
    timestamp: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExpensesResponse {
    expenses: Vec<Expense>,
}

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct BudgetsResponse {
    budgets: Vec<Budget>,
}

#[derive(Debug, Deserialize)]
struct GoalsResponse {
    goals: Vec<Goal>,
}

#[derive(Debug, Deserialize)]
struct CategorySpendingResponse {
    category_spending: HashMap<String, f64>,
}

/// Short-lived token handed to the third-party bank widget.
#[derive(Debug, Deserialize)]
pub struct LinkToken {
    pub link_token: String,
    pub expires_in: u64,
}

/// Body for expense create/update.
#[derive(Debug, Serialize)]
pub struct NewExpense {
    pub date: NaiveDate,
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub merchant: String,
    #[serde(rename = "type")]
    pub kind: ExpenseKind,
    pub original_currency: Option<String>,
}

/// Body for goal creation.
#[derive(Debug, Serialize)]
pub struct NewGoal {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: crate::models::GoalKind,
    pub recurrence: crate::models::Recurrence,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub priority: crate::models::Priority,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Serialize)]
struct SaveConnectionBody<'a> {
    link_id: &'a str,
    institution: &'a Institution,
}

/// Thin blocking client for the dashboard backend.
pub struct ApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: http_client()?,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(resp: reqwest::blocking::Response) -> Result<reqwest::blocking::Response, ApiError> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body: BackendErrorBody = resp
            .text()
            .ok()
            .and_then(|t| serde_json::from_str(&t).ok())
            .unwrap_or_default();
        Err(ApiError::Backend {
            code: body
                .code
                .unwrap_or_else(|| format!("http_{}", status.as_u16())),
            detail: body.detail.unwrap_or_else(|| status.to_string()),
        })
    }

    fn decode<T: serde::de::DeserializeOwned>(
        resp: reqwest::blocking::Response,
    ) -> Result<T, ApiError> {
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Self::check(self.http.get(self.url(path)).send()?)?;
        Self::decode(resp)
    }

    pub fn fetch_currencies(&self) -> Result<HashMap<String, Currency>, ApiError> {
        let body: CurrenciesResponse = self.get_json("/currencies")?;
        Ok(body.currencies)
    }

    pub fn fetch_exchange_rates(&self) -> Result<RateTable, ApiError> {
        let body: RatesResponse = self.get_json("/exchange-rates")?;
        Ok(RateTable::new(body.rates))
    }

    pub fn list_expenses(&self) -> Result<Vec<Expense>, ApiError> {
        let body: ExpensesResponse = self.get_json("/expenses")?;
        Ok(body.expenses)
    }

    pub fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ApiError> {
        let resp = Self::check(self.http.post(self.url("/expenses")).json(expense).send()?)?;
        Self::decode(resp)
    }

    pub fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<Expense, ApiError> {
        let resp = Self::check(
            self.http
                .put(self.url(&format!("/expenses/{id}")))
                .json(expense)
                .send()?,
        )?;
        Self::decode(resp)
    }

    pub fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        Self::check(self.http.delete(self.url(&format!("/expenses/{id}"))).send()?)?;
        Ok(())
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body: CategoriesResponse = self.get_json("/categories")?;
        Ok(body.categories)
    }

    pub fn list_budgets(&self) -> Result<Vec<Budget>, ApiError> {
        let body: BudgetsResponse = self.get_json("/budgets")?;
        Ok(body.budgets)
    }

    pub fn list_goals(&self) -> Result<Vec<Goal>, ApiError> {
        let body: GoalsResponse = self.get_json("/goals")?;
        Ok(body.goals)
    }

    pub fn create_goal(&self, goal: &NewGoal) -> Result<Goal, ApiError> {
        let resp = Self::check(self.http.post(self.url("/goals")).json(goal).send()?)?;
        Self::decode(resp)
    }

    pub fn delete_goal(&self, id: i64) -> Result<(), ApiError> {
        Self::check(self.http.delete(self.url(&format!("/goals/{id}"))).send()?)?;
        Ok(())
    }

    /// Server-side converted per-category spend.
    pub fn category_spending(&self, currency: &str) -> Result<HashMap<String, f64>, ApiError> {
        let body: CategorySpendingResponse =
            self.get_json(&format!("/category-spending?currency={currency}"))?;
        Ok(body.category_spending)
    }

    pub fn create_link_token(&self) -> Result<LinkToken, ApiError> {
        let resp = Self::check(self.http.post(self.url("/integrations/link-token")).send()?)?;
        Self::decode(resp)
    }

    /// Complete the bank-link flow with the widget's success payload.
    pub fn save_connection(&self, link_id: &str, institution: &Institution) -> Result<(), ApiError> {
        let body = SaveConnectionBody {
            link_id,
            institution,
        };
        Self::check(
            self.http
                .post(self.url("/integrations/connections"))
                .json(&body)
                .send()?,
        )?;
        Ok(())
    }
}
