//! Hand-built catalog mirroring the bundled content.
//!
//! The content crate asserts the two stay equal.

use crate::env::{
    CatalogSnapshot, ItemDefinition, ItemEffect, ItemKind, LocationDefinition, NpcDefinition,
    ScrumEventDefinition, TaskDefinition,
};
use crate::state::{EventId, ItemId, LocationId, NpcId, TaskId, TimeOfDay};

use TimeOfDay::*;

fn lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

fn location(
    id: LocationId,
    name: &str,
    description: &str,
    available_at: &[TimeOfDay],
    npcs: &[NpcId],
) -> LocationDefinition {
    LocationDefinition {
        id,
        name: name.into(),
        description: description.into(),
        available_at: available_at.to_vec(),
        npcs: npcs.to_vec(),
    }
}

fn item(
    id: ItemId,
    name: &str,
    description: &str,
    icon: &str,
    kind: ItemKind,
    effect: ItemEffect,
) -> ItemDefinition {
    ItemDefinition {
        id,
        name: name.into(),
        description: description.into(),
        icon: icon.into(),
        kind,
        effect: Some(effect),
    }
}

fn npc(
    id: NpcId,
    title: &str,
    hint: &str,
    available_at: &[TimeOfDay],
    position: [f32; 3],
) -> NpcDefinition {
    NpcDefinition {
        id,
        title: title.into(),
        hint: hint.into(),
        available_at: available_at.to_vec(),
        position,
    }
}

pub fn catalog() -> CatalogSnapshot {
    let locations = vec![
        location(
            LocationId::Home,
            "Home",
            "Your cozy apartment. A perfect place to rest and recover.",
            &[Morning, Evening, Night],
            &[],
        ),
        location(
            LocationId::Office,
            "Office",
            "The bustling tech startup where you work.",
            &[Morning, Noon, Evening],
            &[NpcId::ProductOwner, NpcId::ScrumMaster],
        ),
        location(
            LocationId::Cafe,
            "Coffee Shop",
            "A quiet cafe perfect for focused work.",
            &[Morning, Noon, Evening],
            &[NpcId::Barista],
        ),
        location(
            LocationId::Gym,
            "Gym",
            "Keep your body and mind healthy.",
            &[Morning, Noon, Evening],
            &[NpcId::Trainer],
        ),
        location(
            LocationId::Bar,
            "Tech Bar",
            "Popular hangout spot for local developers.",
            &[Evening, Night],
            &[NpcId::Bartender],
        ),
    ];

    let items = vec![
        item(
            ItemId::Coffee,
            "Coffee",
            "A fresh cup of coffee. Restores energy.",
            "☕",
            ItemKind::Consumable,
            ItemEffect {
                energy: 30,
                ..ItemEffect::default()
            },
        ),
        item(
            ItemId::EnergyDrink,
            "Energy Drink",
            "Quick energy boost but might crash later.",
            "🥤",
            ItemKind::Consumable,
            ItemEffect {
                energy: 50,
                health: -10,
                ..ItemEffect::default()
            },
        ),
        item(
            ItemId::HealthySnack,
            "Healthy Snack",
            "A nutritious snack. Restores health.",
            "🥗",
            ItemKind::Consumable,
            ItemEffect {
                health: 20,
                ..ItemEffect::default()
            },
        ),
        item(
            ItemId::MeditationGuide,
            "Meditation Guide",
            "Ancient wisdom for modern problems.",
            "📔",
            ItemKind::Collectible,
            ItemEffect {
                awareness: 10,
                ..ItemEffect::default()
            },
        ),
    ];

    let tasks = vec![
        TaskDefinition {
            id: TaskId::FixCriticalBug,
            title: "Fix Critical Bug".into(),
            description: "Production is down! We need this fixed ASAP!".into(),
            exp_reward: 100,
            time_limit: 60,
            dialogue: lines(&[
                "Emergency! The main service is down!",
                "Users are complaining and the CEO is breathing down our necks.",
                "Can you handle this ASAP?",
            ]),
        },
        TaskDefinition {
            id: TaskId::ImplementDarkMode,
            title: "Implement Dark Mode".into(),
            description: "Users have been requesting this feature for months.".into(),
            exp_reward: 80,
            time_limit: 120,
            dialogue: lines(&[
                "Hey dev! Our users really want a dark mode.",
                "Should be straightforward, right?",
                "The design team already provided the specs.",
            ]),
        },
        TaskDefinition {
            id: TaskId::OptimizePerformance,
            title: "Optimize Performance".into(),
            description: "The app is getting sluggish. Time for some optimization.".into(),
            exp_reward: 120,
            time_limit: 180,
            dialogue: lines(&[
                "Our metrics show the app is slowing down.",
                "We need to improve performance across the board.",
                "Think you can handle this optimization task?",
            ]),
        },
    ];

    let events = vec![
        ScrumEventDefinition {
            id: EventId::Daily,
            title: "Daily Standup".into(),
            description: "Quick sync with the team".into(),
            exp_reward: 20,
            energy_cost: 10,
            dialogue: lines(&[
                "Good morning team!",
                "Let's sync up on our progress.",
                "Any blockers we should discuss?",
            ]),
        },
        ScrumEventDefinition {
            id: EventId::Retro,
            title: "Sprint Retrospective".into(),
            description: "Review and improve our process".into(),
            exp_reward: 50,
            energy_cost: 25,
            dialogue: lines(&[
                "Time to reflect on our sprint.",
                "What went well? What could be improved?",
                "Let's make actionable improvements.",
            ]),
        },
    ];

    let npcs = vec![
        npc(
            NpcId::ProductOwner,
            "Product Owner",
            "Get new task",
            &[Morning, Noon, Evening],
            [5.0, 0.0, 5.0],
        ),
        npc(
            NpcId::ScrumMaster,
            "Scrum Master",
            "Scrum activities",
            &[Morning, Noon],
            [-5.0, 0.0, 5.0],
        ),
        npc(
            NpcId::Barista,
            "Barista",
            "Buy coffee",
            &[Morning, Noon, Evening],
            [0.0, 0.0, 5.0],
        ),
        npc(
            NpcId::Trainer,
            "Trainer",
            "Exercise",
            &[Morning, Noon, Evening],
            [3.0, 0.0, 3.0],
        ),
        npc(
            NpcId::Bartender,
            "Bartender",
            "Order drinks",
            &[Evening, Night],
            [-3.0, 0.0, 3.0],
        ),
    ];

    CatalogSnapshot::new(locations, items, tasks, events, npcs)
}
