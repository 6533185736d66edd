use std::collections::HashMap;

use tera::{Error, Tera, Value, from_value, to_value};

use crate::config::SiteConfig;
use crate::dates::{self, INVALID_DATE};
use crate::error::{Result, SedgeError};
use crate::excerpt;
use crate::taxonomy;
use crate::types::ContentItem;
use crate::urls;

pub fn register_filters(tera: &mut Tera, config: &SiteConfig) -> Result<()> {
    for name in &config.filters {
        match name.as_str() {
            "excerpt" => tera.register_filter("excerpt", excerpt_filter),
            "date" => tera.register_filter("date", date_filter),
            "date_display" => tera.register_filter("date_display", date_display_filter),
            "groupby" => tera.register_filter("groupby", groupby_filter),
            "relative_url" => tera.register_filter("relative_url", relative_url_filter),
            "slugify" => tera.register_filter("slugify", slugify_filter),
            _ => return Err(SedgeError::UnknownFilter { name: name.clone() }),
        }
    }

    Ok(())
}

fn excerpt_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let content = value
        .as_str()
        .ok_or_else(|| Error::msg("excerpt filter expects a string"))?;
    Ok(Value::String(excerpt::excerpt(content)))
}

fn date_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let pattern = match args.get("format") {
        Some(format) => Some(
            from_value::<String>(format.clone())
                .map_err(|_| Error::msg("date filter `format` argument must be a string"))?,
        ),
        None => None,
    };

    let rendered = match dates::parse_timestamp(value) {
        Some(date) => dates::format(&date, pattern.as_deref()),
        None => INVALID_DATE.to_string(),
    };

    Ok(Value::String(rendered))
}

fn date_display_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let rendered = match dates::parse_timestamp(value) {
        Some(date) => dates::display(&date),
        None => INVALID_DATE.to_string(),
    };

    Ok(Value::String(rendered))
}

fn groupby_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let items = from_value::<Vec<ContentItem>>(value.clone())
        .map_err(|_| Error::msg("groupby filter expects a list of content items"))?;
    let key = args
        .get("key")
        .and_then(|key| key.as_str())
        .ok_or_else(|| Error::msg("groupby filter requires a string `key` argument"))?;

    let groups = taxonomy::group_by(&items, key);
    Ok(to_value(groups)?)
}

fn relative_url_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let url = value
        .as_str()
        .ok_or_else(|| Error::msg("relative_url filter expects a string"))?;
    Ok(Value::String(urls::relativize(url)))
}

fn slugify_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = value
        .as_str()
        .ok_or_else(|| Error::msg("slugify filter expects a string"))?;
    Ok(Value::String(urls::anchor_slug(text)))
}
