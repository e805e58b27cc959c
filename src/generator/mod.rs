//! Output generators projecting the post collection into feed.xml,
//! sitemap.xml, robots.txt and the tag-mapping script.

pub mod robots;
pub mod rss;
pub mod scripts;
pub mod sitemap;
