use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveTime;
use spdlog::{debug, info};

use crate::config::Config;
use crate::post::PostMeta;
use crate::post_list::{source_path, PostList};
use crate::text_utils::{join_url, parse_utc_offset};
use crate::view::rss_renderer::{FeedEntry, RssChannel};

/// Runs the whole pipeline: scan the build directory, extract metadata from
/// each post's source document, sort, render the RSS feed and write it next
/// to the rendered pages. Returns the path of the written feed file.
pub fn build_feed(config: &Config) -> Result<PathBuf> {
    let offset = parse_utc_offset(&config.rss_feed.utc_offset)
        .map_err(|e| anyhow!("{} - check rss_feed.utc_offset", e))?;

    let post_list = PostList {
        build_dir: config.paths.build_dir.clone(),
        excluded: vec![
            config.paths.index_file.clone(),
            config.rss_feed.file_name.clone(),
        ],
    };
    let pages = post_list.retrieve_pages()?;
    info!("Found {} posts in {}", pages.len(), config.paths.build_dir.display());

    let mut posts = Vec::with_capacity(pages.len());
    for page in &pages {
        let source = source_path(&config.paths.source_dir, page, &config.paths.source_extension);
        let meta = PostMeta::from(&source, page)?;
        debug!("Extracted {}", meta);
        posts.push(meta);
    }

    // Date ascending; page name untangles posts published on the same day
    posts.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.link.cmp(&b.link)));

    let mut entries = Vec::with_capacity(posts.len());
    for post in &posts {
        let published = post.date
            .and_time(NaiveTime::MIN)
            .and_local_timezone(offset)
            .single()
            .ok_or_else(|| anyhow!("Invalid publish time for {}", post.link))?;

        entries.push(FeedEntry {
            title: post.title.clone(),
            link: join_url(&config.rss_feed.site_url, &post.link),
            author_name: config.author.name.clone(),
            author_email: config.author.email.clone(),
            published,
        });
    }

    let feed_link = join_url(&config.rss_feed.site_url, &config.rss_feed.file_name);
    let channel = RssChannel {
        ch_title: &config.rss_feed.title,
        ch_link: &config.rss_feed.site_url,
        ch_desc: &config.rss_feed.subtitle,
        ch_language: &config.rss_feed.language,
        ch_feed_link: &feed_link,
    };
    let xml = channel.render(&entries)?;

    let output = config.paths.build_dir.join(&config.rss_feed.file_name);
    match fs::write(&output, xml) {
        Ok(()) => {}
        Err(e) => return Err(anyhow!("Error writing feed file {}: {}", output.display(), e)),
    }
    info!("Feed written to {} ({} entries)", output.display(), entries.len());

    Ok(output)
}
