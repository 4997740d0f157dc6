//! CMS records as they arrive over the wire, and the validated records that
//! make up the snapshot.
//!
//! Raw records keep every field optional and are decoded one document at a
//! time, so one malformed document does not fail the whole response;
//! [`CmsRecord::validate`] decides what the site can actually render.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix the CMS gives unpublished edits when queried with a token.
const DRAFT_PREFIX: &str = "drafts.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub posts: Vec<Post>,
    pub testimonials: Vec<Testimonial>,
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub read_time: Option<u32>,
    pub published_at: Option<String>,
    pub image_url: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: Option<String>,
    pub quote: String,
    pub image_url: Option<String>,
    pub initial: Option<String>,
    pub gradient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub features: Vec<String>,
    pub category: Option<String>,
    pub payment_button_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPost {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub read_time: Option<f64>,
    pub published_at: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub body: Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTestimonial {
    pub id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub quote: Option<String>,
    pub image_url: Option<String>,
    pub initial: Option<String>,
    pub gradient: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPackage {
    pub id: Option<String>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    pub payment_button_id: Option<String>,
}

/// Why a raw record was left out of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    pub id: Option<String>,
    pub reason: &'static str,
}

pub trait CmsRecord {
    type Record;

    fn validate(self) -> Result<Self::Record, Rejected>;
}

/// Records are deduplicated on this before they reach the snapshot.
pub trait HasId {
    fn id(&self) -> &str;
}

macro_rules! impl_has_id {
    ($($ty:ty),*) => {
        $(impl HasId for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_has_id!(Post, Testimonial, Package);

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn published_id(id: Option<String>) -> Result<String, Rejected> {
    let id = present(id).ok_or(Rejected {
        id: None,
        reason: "missing id",
    })?;
    if id.starts_with(DRAFT_PREFIX) {
        return Err(Rejected {
            id: Some(id),
            reason: "unpublished draft",
        });
    }
    Ok(id)
}

fn required(id: &str, value: Option<String>, reason: &'static str) -> Result<String, Rejected> {
    present(value).ok_or_else(|| Rejected {
        id: Some(id.to_string()),
        reason,
    })
}

impl CmsRecord for RawPost {
    type Record = Post;

    fn validate(self) -> Result<Post, Rejected> {
        let id = published_id(self.id)?;
        let title = required(&id, self.title, "missing title")?;
        let slug = required(&id, self.slug, "missing slug")?;
        Ok(Post {
            id,
            title,
            slug,
            description: present(self.description),
            category: present(self.category),
            read_time: self
                .read_time
                .filter(|minutes| minutes.is_finite() && *minutes >= 0.0)
                .map(|minutes| minutes.round() as u32),
            published_at: present(self.published_at),
            image_url: present(self.image_url),
            body: self.body,
        })
    }
}

impl CmsRecord for RawTestimonial {
    type Record = Testimonial;

    fn validate(self) -> Result<Testimonial, Rejected> {
        let id = published_id(self.id)?;
        if self.is_active == Some(false) {
            return Err(Rejected {
                id: Some(id),
                reason: "inactive",
            });
        }
        let name = required(&id, self.name, "missing name")?;
        let quote = required(&id, self.quote, "missing quote")?;
        Ok(Testimonial {
            id,
            name,
            role: present(self.role),
            quote,
            image_url: present(self.image_url),
            initial: present(self.initial),
            gradient: present(self.gradient),
        })
    }
}

impl CmsRecord for RawPackage {
    type Record = Package;

    fn validate(self) -> Result<Package, Rejected> {
        let id = published_id(self.id)?;
        let title = required(&id, self.title, "missing title")?;
        Ok(Package {
            id,
            title,
            price: self.price.filter(|p| p.is_finite()),
            description: present(self.description),
            features: self
                .features
                .unwrap_or_default()
                .into_iter()
                .filter_map(|f| present(Some(f)))
                .collect(),
            category: present(self.category),
            payment_button_id: present(self.payment_button_id),
        })
    }
}

/// RFC 3339 timestamps, or plain `YYYY-MM-DD` dates taken as midnight UTC.
fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
}

/// Newest first. Posts without a parseable date sort last, keeping their
/// relative order.
pub fn sort_posts_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        let a_date = a.published_at.as_deref().and_then(parse_published);
        let b_date = b.published_at.as_deref().and_then(parse_published);
        match (a_date, b_date) {
            (Some(a), Some(b)) => b.cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}
