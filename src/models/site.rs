use serde::{Deserialize, Serialize};

/// Branding and contact constants shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand_name: String,
    pub whatsapp_number: String,
    pub domain: String,
    pub currency: String,
    pub meta: SeoDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoDefaults {
    pub tagline: String,
    pub description: String,
    pub description_short: String,
    /// Root-relative path of the Open Graph image.
    pub og_image: String,
    pub support_email: String,
    pub founding_year: String,
}

impl SiteConfig {
    pub fn base_url(&self) -> String {
        format!("https://{}", self.domain)
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("© {} {}. All rights reserved.", year, self.brand_name)
    }
}
