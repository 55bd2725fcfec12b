//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account stored in Firestore.
///
/// The `password_hash` field stays in the storage layer; API responses are
/// built from explicit view structs that omit it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Generated UUID (also used as document ID), immutable
    pub id: String,
    /// Email address, unique at signup
    pub email: String,
    /// Bcrypt hash of the password
    pub password_hash: String,
    /// Display name
    pub name: Option<String>,
    /// Age in years
    pub age: Option<u32>,
    /// Wellness goals ("lose weight", "sleep better", ...)
    #[serde(default)]
    pub health_goals: Vec<String>,
    /// Dietary preferences ("vegetarian", "low carb", ...)
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Self-reported fitness level ("beginner", "intermediate", ...)
    pub fitness_level: Option<String>,
    /// When the account was created (RFC3339)
    pub created_at: String,
    /// Last profile update (RFC3339)
    pub updated_at: String,
}

/// Sparse profile update: only fields present in the request change.
///
/// Absent fields deserialize to `None` and leave the stored value alone,
/// so applying the same payload twice is idempotent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub health_goals: Option<Vec<String>>,
    pub dietary_preferences: Option<Vec<String>>,
    pub fitness_level: Option<String>,
}

impl ProfileUpdate {
    /// Merge this update into a user, field by field.
    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = Some(name.clone());
        }
        if let Some(age) = self.age {
            user.age = Some(age);
        }
        if let Some(goals) = &self.health_goals {
            user.health_goals = goals.clone();
        }
        if let Some(prefs) = &self.dietary_preferences {
            user.dietary_preferences = prefs.clone();
        }
        if let Some(level) = &self.fitness_level {
            user.fitness_level = Some(level.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "u-1".to_string(),
            email: "a@example.com".to_string(),
            password_hash: "$2b$12$hash".to_string(),
            name: Some("Ada".to_string()),
            age: Some(34),
            health_goals: vec!["sleep better".to_string()],
            dietary_preferences: vec![],
            fitness_level: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_apply_changes_only_supplied_fields() {
        let mut user = test_user();
        let update = ProfileUpdate {
            age: Some(35),
            fitness_level: Some("intermediate".to_string()),
            ..Default::default()
        };

        update.apply(&mut user);

        assert_eq!(user.age, Some(35));
        assert_eq!(user.fitness_level.as_deref(), Some("intermediate"));
        // Untouched fields keep their values
        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.health_goals, vec!["sleep better".to_string()]);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut once = test_user();
        let mut twice = test_user();
        let update = ProfileUpdate {
            name: Some("Grace".to_string()),
            health_goals: Some(vec!["run a 10k".to_string()]),
            ..Default::default()
        };

        update.apply(&mut once);
        update.apply(&mut twice);
        update.apply(&mut twice);

        assert_eq!(once.name, twice.name);
        assert_eq!(once.health_goals, twice.health_goals);
        assert_eq!(once.age, twice.age);
    }

    #[test]
    fn test_absent_fields_deserialize_to_none() {
        let update: ProfileUpdate = serde_json::from_str(r#"{"age": 40}"#).unwrap();
        assert_eq!(update.age, Some(40));
        assert!(update.name.is_none());
        assert!(update.health_goals.is_none());
        assert!(update.dietary_preferences.is_none());
        assert!(update.fitness_level.is_none());
    }
}
