//! Request payloads for the mutation handlers
//!
//! Create payloads are strict: every required field must be present with the
//! right type. Update payloads are partial and lenient, see [`super::lenient`].

use serde::{Deserialize, Serialize};

use super::lenient;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserInput {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::integer",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostInput {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::boolean",
        skip_serializing_if = "Option::is_none"
    )]
    pub published: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCommentInput {
    pub text: String,
    pub author: String,
    pub post: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCommentInput {
    #[serde(
        default,
        deserialize_with = "lenient::string",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_user_ignores_mistyped_fields() {
        let json = r#"{"name": 42, "email": "new@x.com", "age": "thirty"}"#;
        let input: UpdateUserInput = serde_json::from_str(json).unwrap();

        assert_eq!(input.name, None);
        assert_eq!(input.email.as_deref(), Some("new@x.com"));
        assert_eq!(input.age, None);
    }

    #[test]
    fn test_update_post_published_must_be_boolean() {
        let input: UpdatePostInput = serde_json::from_str(r#"{"published": "true"}"#).unwrap();
        assert_eq!(input.published, None);

        let input: UpdatePostInput = serde_json::from_str(r#"{"published": false}"#).unwrap();
        assert_eq!(input.published, Some(false));
    }

    #[test]
    fn test_absent_and_null_fields_are_not_supplied() {
        let input: UpdateCommentInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.text, None);

        let input: UpdateCommentInput = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(input.text, None);
    }

    #[test]
    fn test_integer_age_rejects_fractions() {
        let input: UpdateUserInput = serde_json::from_str(r#"{"age": 31.5}"#).unwrap();
        assert_eq!(input.age, None);

        let input: UpdateUserInput = serde_json::from_str(r#"{"age": 31}"#).unwrap();
        assert_eq!(input.age, Some(31));
    }

    #[test]
    fn test_create_post_requires_all_fields() {
        let result: Result<CreatePostInput, _> =
            serde_json::from_str(r#"{"title": "t", "body": "b", "author": "u1"}"#);
        assert!(result.is_err());
    }
}
