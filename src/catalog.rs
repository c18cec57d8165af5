//! Compiled-in command catalog.
//!
//! Every menu item is a `(name, command, category)` triple declared once in
//! [`COMMANDS`]. Submenus are views over this slice filtered by category, in
//! declaration order.

/// Menu category a command belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Category {
    /// Top-level menu. Holds no commands of its own.
    Main,
    Tarot,
    Content,
    Nsfw,
}

/// One menu item: the label shown on screen and the text typed on the host.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    /// Literal text to type, including the trailing newline.
    pub command: &'static str,
    pub category: Category,
}

const fn entry(name: &'static str, command: &'static str, category: Category) -> CommandEntry {
    CommandEntry {
        name,
        command,
        category,
    }
}

/// The full catalog, in menu order.
pub static COMMANDS: &[CommandEntry] = &[
    // Tarot
    entry("3-Card Tarot", "celestecli --tarot\n", Category::Tarot),
    entry(
        "Celtic Cross",
        "celestecli --tarot --spread celtic\n",
        Category::Tarot,
    ),
    entry("Divine Reading", "celestecli --divine\n", Category::Tarot),
    entry("Divine NSFW", "celestecli --divine-nsfw\n", Category::Tarot),
    entry(
        "Tarot Parsed",
        "celestecli --tarot --parsed\n",
        Category::Tarot,
    ),
    // Content generation - Twitter
    entry(
        "Twitter Short",
        "celestecli --format short --platform twitter --topic \"NIKKE\" --tone \"lewd\"\n",
        Category::Content,
    ),
    entry(
        "Twitter Teasing",
        "celestecli --format short --platform twitter --topic \"NIKKE\" --tone \"teasing\"\n",
        Category::Content,
    ),
    entry(
        "Twitter Chaotic",
        "celestecli --format short --platform twitter --topic \"NIKKE\" --tone \"chaotic\"\n",
        Category::Content,
    ),
    // Content generation - YouTube
    entry(
        "YouTube Desc",
        "celestecli --format long --platform youtube --topic \"Streaming\" --request \"include links to website, socials, products\"\n",
        Category::Content,
    ),
    // NSFW
    entry(
        "NSFW Text",
        "celestecli --nsfw --format short --platform twitter --topic \"NIKKE\" --tone \"explicit\"\n",
        Category::Nsfw,
    ),
    entry(
        "NSFW Image",
        "celestecli --nsfw --image --request \"generate NSFW image of Celeste\"\n",
        Category::Nsfw,
    ),
    entry(
        "List Models",
        "celestecli --nsfw --list-models\n",
        Category::Nsfw,
    ),
];

/// Iterate the commands of one category in declaration order.
pub fn items(category: Category) -> impl Iterator<Item = &'static CommandEntry> {
    COMMANDS.iter().filter(move |c| c.category == category)
}

/// Number of commands in `category`.
pub fn count_items(category: Category) -> usize {
    items(category).count()
}

/// The `index`-th command of `category`, or `None` past the end.
pub fn get_item(category: Category, index: usize) -> Option<&'static CommandEntry> {
    items(category).nth(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Category; 4] = [
        Category::Main,
        Category::Tarot,
        Category::Content,
        Category::Nsfw,
    ];

    #[test]
    fn counts_match_declared_categories() {
        for category in ALL {
            let expected = COMMANDS.iter().filter(|c| c.category == category).count();
            assert_eq!(count_items(category), expected);
        }
        assert_eq!(count_items(Category::Main), 0);
        assert_eq!(count_items(Category::Tarot), 5);
        assert_eq!(count_items(Category::Content), 4);
        assert_eq!(count_items(Category::Nsfw), 3);
    }

    #[test]
    fn lookups_follow_declaration_order() {
        for category in ALL {
            let mut last_pos = None;
            for i in 0..count_items(category) {
                let item = get_item(category, i).unwrap();
                assert_eq!(item.category, category);
                let pos = COMMANDS
                    .iter()
                    .position(|c| core::ptr::eq(c, item))
                    .unwrap();
                if let Some(prev) = last_pos {
                    assert!(pos > prev, "{} out of order", item.name);
                }
                last_pos = Some(pos);
            }
        }
    }

    #[test]
    fn lookup_past_end_is_none() {
        for category in ALL {
            let n = count_items(category);
            assert!(get_item(category, n).is_none());
            assert!(get_item(category, n + 7).is_none());
        }
    }

    #[test]
    fn first_items_per_category() {
        assert_eq!(get_item(Category::Tarot, 0).unwrap().name, "3-Card Tarot");
        assert_eq!(get_item(Category::Content, 3).unwrap().name, "YouTube Desc");
        assert_eq!(
            get_item(Category::Nsfw, 2).unwrap().command,
            "celestecli --nsfw --list-models\n"
        );
    }

    #[test]
    fn every_command_ends_with_newline() {
        for c in COMMANDS {
            assert!(c.command.ends_with('\n'), "{}", c.name);
            assert_ne!(c.category, Category::Main);
        }
    }
}
