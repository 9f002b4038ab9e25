use std::io::Cursor;

use chrono::{DateTime, FixedOffset};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
  <channel>
    <title>Ken Kellner's Blog</title>
    <link>https://kenkellner.com/blog/</link>
    <atom:link href="https://kenkellner.com/blog/feed.xml" rel="self" type="application/rss+xml"/>
    <description> </description>
    <language>en</language>
    <item>
      <title>Occupancy Models in Stan</title>
      <link>https://kenkellner.com/blog/occupancy-stan.html</link>
      <guid isPermaLink="false">https://kenkellner.com/blog/occupancy-stan.html</guid>
      <author>contact@kenkellner.com (Ken Kellner)</author>
      <description></description>
      <pubDate>Thu, 2 Jan 2020 00:00:00 -0500</pubDate>
    </item>
  </channel>
</rss>
*/

pub struct FeedEntry {
    pub title: String,
    pub link: String,
    pub author_name: String,
    pub author_email: String,
    pub published: DateTime<FixedOffset>,
}

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
    pub ch_language: &'a str,
    pub ch_feed_link: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, entries: &[FeedEntry]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

        // <?xml version="1.0" encoding="UTF-8" ?>
        let decl = Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None));
        writer.write_event(decl)?;

        // <rss version="2.0" xmlns:atom="...">
        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:atom", "http://www.w3.org/2005/Atom"));
        writer.write_event(Event::Start(rss))?;

        // <channel>
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;

        // <atom:link href="..." rel="self"/> points at the feed's own
        // published location
        let mut self_link = BytesStart::new("atom:link");
        self_link.push_attribute(("href", self.ch_feed_link));
        self_link.push_attribute(("rel", "self"));
        self_link.push_attribute(("type", "application/rss+xml"));
        writer.write_event(Event::Empty(self_link))?;

        push_text(&mut writer, "description", self.ch_desc)?;
        push_text(&mut writer, "language", self.ch_language)?;

        for entry in entries {
            // <item>
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", entry.title.as_str())?;
            push_text(&mut writer, "link", entry.link.as_str())?;

            // <guid isPermaLink="false">https://.../a.html</guid>
            let mut guid_elem = BytesStart::new("guid");
            guid_elem.push_attribute(("isPermaLink", "false"));
            writer.write_event(Event::Start(guid_elem))?;
            writer.write_event(Event::Text(BytesText::new(entry.link.as_str())))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            // <author>contact@kenkellner.com (Ken Kellner)</author>
            let author = format!("{} ({})", entry.author_email, entry.author_name);
            push_text(&mut writer, "author", author.as_str())?;

            push_text(&mut writer, "description", "")?;

            // <pubDate>Thu, 2 Jan 2020 00:00:00 -0500</pubDate>
            push_text(&mut writer, "pubDate", &entry.published.to_rfc2822())?;

            // </item>
            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        // </channel>
        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        // </rss>
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
