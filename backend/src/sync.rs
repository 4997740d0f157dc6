//! The two operations the scripts expose: pull everything and write the
//! snapshot, or pull everything and only report what came back.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cms::{CmsClient, Collection};
use crate::error::SyncResult;
use crate::models::{
    sort_posts_newest_first, CmsRecord, ContentSnapshot, HasId, RawPackage, RawPost,
    RawTestimonial, Rejected,
};
use crate::snapshot;

/// Validated content plus how many raw records were left out.
#[derive(Debug, Clone, PartialEq)]
pub struct Collected {
    pub snapshot: ContentSnapshot,
    pub skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub posts: usize,
    pub testimonials: usize,
    pub packages: usize,
    pub skipped: usize,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub posts: usize,
    pub testimonials: usize,
    pub packages: usize,
    pub skipped: usize,
    pub sample_post: Option<String>,
    pub sample_testimonial: Option<String>,
    pub sample_package: Option<String>,
}

async fn fetch_valid<R>(
    client: &CmsClient,
    collection: Collection,
    skipped: &mut usize,
) -> SyncResult<Vec<R::Record>>
where
    R: CmsRecord + DeserializeOwned,
    R::Record: HasId,
{
    let raw: Vec<Value> = client.fetch(collection).await?;
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for item in raw {
        match decode_record::<R>(item).and_then(R::validate) {
            Ok(record) => {
                if seen.insert(record.id().to_string()) {
                    records.push(record);
                } else {
                    warn!("Skipping duplicate {} record {}", collection, record.id());
                    *skipped += 1;
                }
            }
            Err(rejected) => {
                warn!(
                    "Skipping {} record {}: {}",
                    collection,
                    rejected.id.as_deref().unwrap_or("<unknown>"),
                    rejected.reason
                );
                *skipped += 1;
            }
        }
    }
    Ok(records)
}

/// One document with a wrong-typed field is rejected on its own instead of
/// failing the whole response.
fn decode_record<R: DeserializeOwned>(item: Value) -> Result<R, Rejected> {
    let id = item
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned);
    serde_json::from_value(item).map_err(|e| {
        debug!("Record {:?} did not decode: {}", id, e);
        Rejected {
            id,
            reason: "malformed record",
        }
    })
}

/// Queries posts, testimonials and packages in turn. Any query failure
/// aborts the whole collection; a bad record only skips itself.
pub async fn collect(client: &CmsClient) -> SyncResult<Collected> {
    let mut skipped = 0;

    let mut posts = fetch_valid::<RawPost>(client, Collection::Posts, &mut skipped).await?;
    sort_posts_newest_first(&mut posts);
    let testimonials =
        fetch_valid::<RawTestimonial>(client, Collection::Testimonials, &mut skipped).await?;
    let packages = fetch_valid::<RawPackage>(client, Collection::Packages, &mut skipped).await?;

    Ok(Collected {
        snapshot: ContentSnapshot {
            posts,
            testimonials,
            packages,
        },
        skipped,
    })
}

pub async fn run_sync(client: &CmsClient, path: &Path) -> SyncResult<SyncSummary> {
    info!("Syncing content from {}", client.config().query_url());
    let Collected { snapshot, skipped } = collect(client).await?;

    snapshot::write(path, &snapshot)?;

    let summary = SyncSummary {
        posts: snapshot.posts.len(),
        testimonials: snapshot.testimonials.len(),
        packages: snapshot.packages.len(),
        skipped,
        path: path.to_path_buf(),
    };
    info!(
        "Wrote {} posts, {} testimonials, {} packages to {} ({} skipped)",
        summary.posts,
        summary.testimonials,
        summary.packages,
        summary.path.display(),
        summary.skipped
    );
    Ok(summary)
}

/// Same queries as [`run_sync`], nothing written.
pub async fn run_verify(client: &CmsClient) -> SyncResult<VerifyReport> {
    info!("Verifying content at {}", client.config().query_url());
    let Collected { snapshot, skipped } = collect(client).await?;

    let report = VerifyReport {
        posts: snapshot.posts.len(),
        testimonials: snapshot.testimonials.len(),
        packages: snapshot.packages.len(),
        skipped,
        sample_post: snapshot
            .posts
            .first()
            .map(|p| format!("{} (/blog/{})", p.title, p.slug)),
        sample_testimonial: snapshot
            .testimonials
            .first()
            .map(|t| format!("{}: \"{}\"", t.name, t.quote)),
        sample_package: snapshot.packages.first().map(|p| match p.price {
            Some(price) => format!("{} at {}", p.title, price),
            None => p.title.clone(),
        }),
    };

    info!("Posts: {}", report.posts);
    if let Some(sample) = &report.sample_post {
        info!("  first: {}", sample);
    }
    info!("Testimonials: {}", report.testimonials);
    if let Some(sample) = &report.sample_testimonial {
        info!("  first: {}", sample);
    }
    info!("Packages: {}", report.packages);
    if let Some(sample) = &report.sample_package {
        info!("  first: {}", sample);
    }
    if report.skipped > 0 {
        warn!("{} records were skipped", report.skipped);
    }
    Ok(report)
}
