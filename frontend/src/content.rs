//! The content snapshot written by the backend's `sync-content` binary.

use std::rc::Rc;

use chrono::{DateTime, NaiveDate};
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
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
    #[serde(default)]
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub description: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: Option<String>,
    pub payment_button_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentState {
    Loading,
    Ready(Rc<ContentSnapshot>),
    /// The snapshot could not be loaded; pages render without CMS content.
    Unavailable,
}

impl ContentState {
    pub fn snapshot(&self) -> Option<&ContentSnapshot> {
        match self {
            ContentState::Ready(snapshot) => Some(snapshot.as_ref()),
            _ => None,
        }
    }
}

pub async fn fetch_snapshot(url: &str) -> Result<ContentSnapshot, gloo_net::Error> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(gloo_net::Error::GlooError(format!(
            "snapshot request returned status {}",
            response.status()
        )));
    }
    response.json::<ContentSnapshot>().await
}

impl ContentSnapshot {
    pub fn post_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }
}

/// A paragraph-level piece of a post body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyBlock {
    Paragraph(String),
    Heading2(String),
    Heading3(String),
    Quote(String),
}

#[derive(Deserialize)]
struct PortableBlock {
    #[serde(rename = "_type")]
    kind: String,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    children: Vec<PortableSpan>,
}

#[derive(Deserialize)]
struct PortableSpan {
    #[serde(default)]
    text: String,
}

impl Post {
    /// Flattens the CMS rich-text body. Plain string bodies are split into
    /// paragraphs on blank lines; anything unrecognised is dropped.
    pub fn body_blocks(&self) -> Vec<BodyBlock> {
        match &self.body {
            Value::String(text) => text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| BodyBlock::Paragraph(p.to_string()))
                .collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(|item| serde_json::from_value::<PortableBlock>(item.clone()).ok())
                .filter(|block| block.kind == "block")
                .filter_map(|block| {
                    let text: String = block.children.iter().map(|s| s.text.as_str()).collect();
                    if text.trim().is_empty() {
                        return None;
                    }
                    Some(match block.style.as_deref() {
                        Some("h1") | Some("h2") => BodyBlock::Heading2(text),
                        Some("h3") | Some("h4") => BodyBlock::Heading3(text),
                        Some("blockquote") => BodyBlock::Quote(text),
                        _ => BodyBlock::Paragraph(text),
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn formatted_date(&self) -> Option<String> {
        self.published_at.as_deref().and_then(format_date)
    }
}

/// `2025-08-13T09:00:00Z` or `2025-08-13` as `August 13, 2025`.
pub fn format_date(raw: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%B %d, %Y").to_string())
}

/// Rupee amount with Indian digit grouping, e.g. `₹1,24,999`.
pub fn format_price(amount: f64) -> String {
    let rupees = amount.round().max(0.0) as u64;
    let digits = rupees.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_with_body(body: Value) -> Post {
        Post {
            id: "post-1".into(),
            title: "Negotiating your offer".into(),
            slug: "negotiating-your-offer".into(),
            description: None,
            category: None,
            read_time: Some(6),
            published_at: Some("2025-08-13T09:00:00Z".into()),
            image_url: None,
            body,
        }
    }

    #[test]
    fn snapshot_deserializes_camel_case() {
        let snapshot: ContentSnapshot = serde_json::from_value(json!({
            "posts": [{
                "id": "p1", "title": "T", "slug": "t", "readTime": 4,
                "publishedAt": "2025-01-02", "imageUrl": null, "body": null
            }],
            "testimonials": [{
                "id": "t1", "name": "Asha", "quote": "Landed the role.",
                "initial": "A", "gradient": "from-rose-400 to-orange-300"
            }],
            "packages": [{
                "id": "k1", "title": "Discover", "price": 4999,
                "features": ["One session"], "paymentButtonId": "pl_x"
            }]
        }))
        .unwrap();
        assert_eq!(snapshot.posts[0].read_time, Some(4));
        assert_eq!(snapshot.testimonials[0].role, None);
        assert_eq!(snapshot.packages[0].payment_button_id.as_deref(), Some("pl_x"));
        assert_eq!(snapshot.post_by_slug("t").map(|p| p.id.as_str()), Some("p1"));
        assert!(snapshot.post_by_slug("missing").is_none());
    }

    #[test]
    fn portable_text_blocks() {
        let post = post_with_body(json!([
            {"_type": "block", "style": "h2", "children": [{"_type": "span", "text": "Before the call"}]},
            {"_type": "block", "style": "normal", "children": [
                {"_type": "span", "text": "Know your "},
                {"_type": "span", "text": "number."}
            ]},
            {"_type": "image", "asset": {"_ref": "image-abc"}},
            {"_type": "block", "style": "blockquote", "children": [{"_type": "span", "text": "Ask."}]},
            {"_type": "block", "style": "normal", "children": []}
        ]));
        assert_eq!(
            post.body_blocks(),
            vec![
                BodyBlock::Heading2("Before the call".into()),
                BodyBlock::Paragraph("Know your number.".into()),
                BodyBlock::Quote("Ask.".into()),
            ]
        );
    }

    #[test]
    fn string_body_splits_paragraphs() {
        let post = post_with_body(json!("First.\n\n  Second.\n\n"));
        assert_eq!(
            post.body_blocks(),
            vec![
                BodyBlock::Paragraph("First.".into()),
                BodyBlock::Paragraph("Second.".into()),
            ]
        );
        assert!(post_with_body(Value::Null).body_blocks().is_empty());
    }

    #[test]
    fn dates() {
        assert_eq!(format_date("2025-08-13T09:00:00Z").as_deref(), Some("August 13, 2025"));
        assert_eq!(format_date("2024-02-01").as_deref(), Some("February 01, 2024"));
        assert_eq!(format_date("soon"), None);
        assert_eq!(
            post_with_body(Value::Null).formatted_date().as_deref(),
            Some("August 13, 2025")
        );
    }

    #[test]
    fn rupee_grouping() {
        assert_eq!(format_price(999.0), "₹999");
        assert_eq!(format_price(4999.0), "₹4,999");
        assert_eq!(format_price(24999.0), "₹24,999");
        assert_eq!(format_price(124999.0), "₹1,24,999");
        assert_eq!(format_price(10000000.0), "₹1,00,00,000");
    }
}
