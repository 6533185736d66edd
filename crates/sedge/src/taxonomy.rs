use std::collections::{BTreeSet, HashMap, hash_map::Entry};

use crate::types::{ContentItem, TagGroup};

pub fn collect_tags(items: &[ContentItem]) -> Vec<String> {
    let mut tags = BTreeSet::new();

    for item in items {
        for tag in item.tags() {
            tags.insert(tag.clone());
        }
    }

    tags.into_iter().collect()
}

pub fn group_by<'a>(items: &'a [ContentItem], key: &str) -> Vec<TagGroup<'a>> {
    let mut groups: Vec<TagGroup<'a>> = Vec::new();
    let mut positions: HashMap<&'a str, usize> = HashMap::new();

    for item in items {
        for value in item.metadata.get_list(key) {
            match positions.entry(value) {
                Entry::Occupied(entry) => groups[*entry.get()].items.push(item),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(TagGroup {
                        tag: value.clone(),
                        items: vec![item],
                    });
                }
            }
        }
    }

    groups
}
