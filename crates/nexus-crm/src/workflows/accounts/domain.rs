use serde::{Deserialize, Serialize};

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    #[default]
    User,
}

/// Profile row linked to an external auth identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub auth_id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl UserProfile {
    /// Stored avatar, or a generated initials image.
    pub fn avatar(&self) -> String {
        if let Some(url) = self.avatar_url.as_deref().filter(|url| !url.is_empty()) {
            return url.to_string();
        }
        reqwest::Url::parse_with_params(
            AVATAR_SERVICE,
            &[
                ("name", self.name.as_str()),
                ("background", "8c52ff"),
                ("color", "fff"),
            ],
        )
        .map(|url| url.to_string())
        .unwrap_or_else(|_| AVATAR_SERVICE.to_string())
    }

    /// Apply the fields present in `update`; blank strings are ignored.
    pub fn apply(&mut self, update: ProfileUpdate) {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|value| !value.trim().is_empty())
        }

        if let Some(name) = present(update.name) {
            self.name = name;
        }
        if let Some(email) = present(update.email) {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(avatar) = present(update.avatar_url) {
            self.avatar_url = Some(avatar);
        }
        if let Some(phone) = present(update.phone) {
            self.phone = Some(phone);
        }
        if let Some(location) = present(update.location) {
            self.location = Some(location);
        }
        if let Some(timezone) = present(update.timezone) {
            self.timezone = Some(timezone);
        }
        if let Some(language) = present(update.language) {
            self.language = Some(language);
        }
    }

    pub fn view(&self) -> ProfileView {
        ProfileView {
            avatar_url: self.avatar(),
            profile: self.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Stored avatar or the generated fallback.
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub timezone: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub auth_id: String,
    pub name: String,
    pub email: String,
}
