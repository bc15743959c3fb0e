//! Typed content records as stored in the site's JSON files.
//!
//! Collection records (`Service`, `CaseStudy`, `Blog`) use camelCase keys;
//! the company document keeps the snake_case keys of `company.json`.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A service offering (`services.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub image: String,
}

/// A client success story (`case-studies.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub client: String,
    pub industry: String,
    pub challenge: String,
    pub solution: String,
    /// Outcome statements; most lead with a figure such as `45%`.
    #[serde(default)]
    pub results: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub duration: String,
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A blog article (`blogs.json`, `blogs-additional.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub author: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub excerpt: String,
    /// Long-form body; see [`crate::content::segment`] for the block convention.
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub meta_description: Option<String>,
}

impl Blog {
    /// Document title: the SEO title when present, otherwise `"{title} | {site} Blog"`.
    pub fn page_title(&self, site: &str) -> String {
        match non_empty(self.seo_title.as_deref()) {
            Some(seo) => seo.to_string(),
            None => format!("{} | {site} Blog", self.title),
        }
    }

    /// Meta description, falling back to the excerpt.
    pub fn page_description(&self) -> &str {
        non_empty(self.meta_description.as_deref()).unwrap_or(&self.excerpt)
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

// ============================================================================
// Company document
// ============================================================================

/// The whole of `company.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyData {
    pub company: Company,
    #[serde(default)]
    pub contact: ContactInfo,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub partnerships: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: String,
    pub tagline: String,
    pub location: String,
    pub founded: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub values: Vec<CompanyValue>,
    pub services_overview: String,
    pub specializations: Vec<String>,
    pub industries_served: Vec<String>,
    pub statistics: Statistics,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub headquarters: Address,
    pub phone: String,
    pub email: String,
    pub sales_email: String,
    pub support_email: String,
    pub website: String,
    pub business_hours: BusinessHours,
    pub emergency_support: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    /// `"City, ST 12345"`, skipping empty parts.
    pub fn locality(&self) -> String {
        let region = [self.state.as_str(), self.zip.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        [self.city.as_str(), region.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessHours {
    pub monday_friday: String,
    pub saturday: String,
    pub sunday: String,
}

// ============================================================================
// Statistics
// ============================================================================

/// Named display metrics (`"clients_served": "250+"`), in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics(Vec<(String, String)>);

impl Statistics {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

}

/// Human label for a metric key: `clients_served` -> `Clients Served`.
pub fn metric_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Serialize for Statistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Statistics {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StatisticsVisitor;

        impl<'de> Visitor<'de> for StatisticsVisitor {
            type Value = Statistics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of metric names to display strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Statistics, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    entries.push((key, value));
                }
                Ok(Statistics(entries))
            }
        }

        deserializer.deserialize_map(StatisticsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog_json(extra: &str) -> String {
        format!(
            r#"{{"id":1,"slug":"a","title":"Grid Outlook","author":"Jane","date":"2024-01-15",
            "category":"Markets","readTime":"5 min","excerpt":"Short.","content":"Body"{extra}}}"#
        )
    }

    #[test]
    fn test_blog_optional_seo_fields() {
        let blog: Blog = serde_json::from_str(&blog_json("")).unwrap();
        assert_eq!(blog.seo_title, None);
        assert!(blog.tags.is_empty());
        assert_eq!(blog.page_title("TradeNexus"), "Grid Outlook | TradeNexus Blog");
        assert_eq!(blog.page_description(), "Short.");
    }

    #[test]
    fn test_blog_seo_overrides() {
        let blog: Blog = serde_json::from_str(&blog_json(
            r#","seoTitle":"Custom","metaDescription":"Meta""#,
        ))
        .unwrap();
        assert_eq!(blog.page_title("TradeNexus"), "Custom");
        assert_eq!(blog.page_description(), "Meta");
    }

    #[test]
    fn test_blog_empty_seo_counts_as_absent() {
        let blog: Blog =
            serde_json::from_str(&blog_json(r#","seoTitle":"","metaDescription":"  ""#)).unwrap();
        assert_eq!(blog.page_title("X"), "Grid Outlook | X Blog");
        assert_eq!(blog.page_description(), "Short.");
    }

    #[test]
    fn test_service_camel_case_keys() {
        let json = r#"{"id":3,"slug":"s","title":"T","description":"D",
            "shortDescription":"SD","category":"Analytics"}"#;
        let service: Service = serde_json::from_str(json).unwrap();
        assert_eq!(service.short_description, "SD");
        assert!(service.features.is_empty());
    }

    #[test]
    fn test_statistics_preserve_order() {
        let json = r#"{"company":{"name":"N","statistics":{"team_size":"50+","clients_served":"250+"}}}"#;
        let data: CompanyData = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = data.company.statistics.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["team_size", "clients_served"]);
        assert_eq!(data.company.statistics.iter().nth(1), Some(("clients_served", "250+")));
        assert!(data.team.is_empty());

        let out = serde_json::to_string(&data.company.statistics).unwrap();
        assert_eq!(out, r#"{"team_size":"50+","clients_served":"250+"}"#);
    }

    #[test]
    fn test_metric_label() {
        assert_eq!(metric_label("clients_served"), "Clients Served");
        assert_eq!(metric_label("uptime"), "Uptime");
        assert_eq!(metric_label(""), "");
    }

    #[test]
    fn test_address_locality() {
        let addr = Address {
            city: "Houston".into(),
            state: "TX".into(),
            zip: "77002".into(),
            ..Default::default()
        };
        assert_eq!(addr.locality(), "Houston, TX 77002");
        assert_eq!(Address::default().locality(), "");
    }
}
