//! List site content

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::content::{store, Post};
use crate::error::CmsError;
use crate::Site;

/// A row of `post list`
#[derive(Debug)]
pub enum Listing {
    Post {
        date: NaiveDate,
        title: String,
        url: String,
    },
    Broken {
        source: PathBuf,
        error: CmsError,
    },
}

/// Every post under the posts folder, newest date first; unreadable posts last
pub fn collect(site: &Site) -> Vec<Listing> {
    let mut rows: Vec<Listing> = store::list_metadata_files(&site.posts_dir)
        .into_iter()
        .map(|path| match Post::load(&path) {
            Ok(post) => Listing::Post {
                date: post.meta.date,
                url: post.url_path(),
                title: post.body.title,
            },
            Err(error) => Listing::Broken {
                source: path,
                error,
            },
        })
        .collect();

    rows.sort_by(|a, b| match (a, b) {
        (Listing::Post { date: da, url: ua, .. }, Listing::Post { date: db, url: ub, .. }) => {
            db.cmp(da).then_with(|| ua.cmp(ub))
        }
        (Listing::Post { .. }, Listing::Broken { .. }) => std::cmp::Ordering::Less,
        (Listing::Broken { .. }, Listing::Post { .. }) => std::cmp::Ordering::Greater,
        (Listing::Broken { source: sa, .. }, Listing::Broken { source: sb, .. }) => sa.cmp(sb),
    });
    rows
}

/// Print the post listing
pub fn run(site: &Site) {
    let rows = collect(site);
    println!("Posts ({}):", rows.len());
    for row in rows {
        match row {
            Listing::Post { date, title, url } => {
                println!("  {} - {} [{}]", date.format("%Y-%m-%d"), title, url)
            }
            Listing::Broken { error, .. } => println!("  ! {}", error),
        }
    }
}
