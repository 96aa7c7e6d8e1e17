/// Eco-tasks offered when nothing in the content points at a specific one.
pub const ECO_TASKS: [&str; 7] = [
    "Use a reusable water bottle",
    "Turn off unused lights",
    "Compost food scraps",
    "Walk or bike instead of driving",
    "Avoid single-use plastics",
    "Shop with reusable bags",
    "Unplug electronics not in use",
];

/// A keyword rule: any keyword found in the lowercased content proposes `task`.
#[derive(Debug, Clone, Copy)]
pub struct TagRule {
    pub keywords: &'static [&'static str],
    pub task: &'static str,
}

pub const TAG_RULES: &[TagRule] = &[
    TagRule {
        keywords: &["eat", "food"],
        task: "Try a plant-based meal today",
    },
    TagRule {
        keywords: &["buy", "shop"],
        task: "Check for plastic-free packaging options",
    },
    TagRule {
        keywords: &["bottle", "water", "drink"],
        task: "Use a reusable water bottle",
    },
    TagRule {
        keywords: &["light", "lamp"],
        task: "Turn off unused lights",
    },
    TagRule {
        keywords: &["compost", "scrap", "leftover"],
        task: "Compost food scraps",
    },
    TagRule {
        keywords: &["drive", "driving", "commute", "bike", "walk"],
        task: "Walk or bike instead of driving",
    },
    TagRule {
        keywords: &["plastic", "straw", "takeout"],
        task: "Avoid single-use plastics",
    },
    TagRule {
        keywords: &["grocer", "bag"],
        task: "Shop with reusable bags",
    },
    TagRule {
        keywords: &["unplug", "charger", "electronic", "laptop"],
        task: "Unplug electronics not in use",
    },
];

/// Tasks of every rule with a keyword in `content`, deduplicated, in rule order.
pub fn matching_tasks(content: &str) -> Vec<&'static str> {
    let lower = content.to_lowercase();
    let mut tasks: Vec<&'static str> = Vec::new();
    for rule in TAG_RULES {
        if rule.keywords.iter().any(|k| lower.contains(k)) && !tasks.contains(&rule.task) {
            tasks.push(rule.task);
        }
    }
    tasks
}
