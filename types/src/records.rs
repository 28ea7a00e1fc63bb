use std::fmt::Debug;

use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::query::{ComplaintStatus, Filter, PaymentStatus, StatusFilter, UserSearch};

/// A record type that the backend serves as an offset/limit listing.
pub trait Listing: Debug + Clone + PartialEq + DeserializeOwned + 'static {
    type Filter: Filter;

    /// Collection path relative to the API base URL.
    const PATH: &'static str;
}

/// Raw Mongo documents carry explicit `null`s where a field was never set.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coins: i64,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    /// First and last name joined, `None` when neither is set.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

impl Listing for User {
    type Filter = UserSearch;
    const PATH: &'static str = "/users";
}

/// A coin purchase awaiting or past admin review. The backend joins in the
/// buyer's `first_name` and `username` when the user still exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub package_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coins_amount: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub admin_notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Listing for Payment {
    type Filter = StatusFilter<PaymentStatus>;
    const PATH: &'static str = "/payments";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Complaint {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub complaint_type: String,
    #[serde(default)]
    pub complaint_text: Option<String>,
    #[serde(default)]
    pub reported_user_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Listing for Complaint {
    type Filter = StatusFilter<ComplaintStatus>;
    const PATH: &'static str = "/complaints";
}

/// Generic `{"message": ...}` acknowledgement returned by update endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let user: User = serde_json::from_value(json!({
            "_id": "65a1",
            "user_id": 42,
            "username": "jdoe",
            "first_name": "John",
            "coins": 15,
        }))
        .unwrap();

        assert_eq!(user.gender, None);
        assert!(user.is_active);
        assert_eq!(user.full_name().as_deref(), Some("John"));
    }

    #[test]
    fn one_sparse_user_does_not_spoil_the_page() {
        let users: Vec<User> = serde_json::from_value(json!([
            {"user_id": 1, "username": "jdoe", "first_name": "John", "last_name": "Doe", "coins": 15},
            {
                "user_id": 2,
                "username": null,
                "first_name": null,
                "last_name": null,
                "coins": null,
                "is_active": null,
            },
        ]))
        .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].full_name().as_deref(), Some("John Doe"));
        assert_eq!(users[1].username, None);
        assert_eq!(users[1].full_name(), None);
        assert_eq!(users[1].coins, 0);
        assert!(users[1].is_active);
    }

    #[test]
    fn payment_tolerates_null_columns() {
        let payment: Payment = serde_json::from_value(json!({
            "_id": "65a1f1",
            "package_name": null,
            "coins_amount": null,
            "price": null,
            "status": "approved",
        }))
        .unwrap();

        assert_eq!(payment.package_name, "");
        assert_eq!(payment.coins_amount, 0);
        assert_eq!(payment.price, 0.0);
    }

    #[test]
    fn payment_reads_mongo_id() {
        let payment: Payment = serde_json::from_value(json!({
            "_id": "65a1f0",
            "user_id": 7,
            "package_name": "Gold",
            "coins_amount": 500,
            "price": 9.99,
            "status": "pending",
            "created_at": "2024-03-01T10:00:00",
        }))
        .unwrap();

        assert_eq!(payment.id, "65a1f0");
        assert_eq!(payment.first_name, None);
        assert_eq!(payment.status, "pending");
    }
}
