//! End-to-end session flow over shipped content: pickups, a chest open
//! with paced reveals, and a breakable, observed through the event bus.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rogue_content::ContentFactory;
use rogue_core::{ContainerEntry, ItemType, OpenKind};
use rogue_runtime::{
    Event, InventoryEvent, NotificationEvent, Session, SessionConfig, Topic, WorldEvent,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn shipped_session() -> Session {
    init_tracing();
    let factory = ContentFactory::new(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"),
    );
    let config = factory.load_config().expect("shipped config.toml parses");
    let catalog = factory.load_items().expect("shipped items.ron parses");
    Session::new(Arc::new(catalog), SessionConfig::from(config))
}

#[test]
fn loose_pickups_route_through_the_shipped_catalog() {
    let mut session = shipped_session();
    let mut notifications = session.subscribe(Topic::Notification);

    // Coin with no override amount falls back to the catalog value.
    session.pickup(ItemType::Coin, 0).unwrap();
    assert_eq!(session.player().coins(), 10);

    match notifications.try_recv().unwrap() {
        Event::Notification(NotificationEvent::Pickup { name, .. }) => {
            assert_eq!(name, "Coin");
        }
        other => panic!("unexpected event: {other:?}"),
    }

    // Shipped potions are persistent: they land in the inventory.
    session.pickup(ItemType::HealthPotion, 2).unwrap();
    session.pickup(ItemType::HealthPotion, 1).unwrap();
    assert_eq!(session.inventory().len(), 1);
    assert_eq!(session.inventory()[0].amount, 3);
}

#[test]
fn chest_flow_from_approach_to_claim() {
    let mut session = shipped_session();
    let mut notifications = session.subscribe(Topic::Notification);
    let mut inventory_events = session.subscribe(Topic::Inventory);
    let mut world = session.subscribe(Topic::World);

    let chest = session.spawn_chest(vec![
        ContainerEntry::new(ItemType::Coin, 25),
        ContainerEntry::new(ItemType::HealthPotion, 1),
        ContainerEntry::new(ItemType::PoisonPotion, 1),
    ]);

    // Out of range: the press edge fires but the chest refuses.
    assert_eq!(session.interact(chest, true).unwrap(), None);
    session.interact(chest, false).unwrap();

    session.approach_chest(chest).unwrap();
    assert!(matches!(
        notifications.try_recv().unwrap(),
        Event::Notification(NotificationEvent::Hint(_))
    ));

    assert_eq!(session.interact(chest, true).unwrap(), Some(OpenKind::Full));
    assert!(matches!(
        world.try_recv().unwrap(),
        Event::World(WorldEvent::ChestOpened {
            kind: OpenKind::Full,
            ..
        })
    ));

    // Reveals are paced: nothing before the first interval elapses.
    session.tick(Duration::from_millis(100));
    assert!(notifications.try_recv().is_err());

    // Three entries plus the terminal step, one interval apiece.
    for _ in 0..4 {
        session.tick(Duration::from_millis(250));
    }

    let mut names = Vec::new();
    while let Ok(Event::Notification(NotificationEvent::Pickup { name, .. })) =
        notifications.try_recv()
    {
        names.push(name);
    }
    assert_eq!(names, vec!["Coin", "HealthPotion", "PoisonPotion"]);

    assert_eq!(session.player().coins(), 25);
    assert_eq!(session.inventory().len(), 2);
    assert!(matches!(
        inventory_events.try_recv().unwrap(),
        Event::Inventory(InventoryEvent::Changed { .. })
    ));
    assert!(matches!(
        world.try_recv().unwrap(),
        Event::World(WorldEvent::ChestClaimed { .. })
    ));

    // A fresh press against the claimed chest resolves nothing new.
    session.interact(chest, false).unwrap();
    assert_eq!(session.interact(chest, true).unwrap(), None);
    session.tick(Duration::from_millis(500));
    assert_eq!(session.player().coins(), 25);
}

#[test]
fn breakable_spills_then_despawns() {
    let mut session = shipped_session();
    let mut world = session.subscribe(Topic::World);

    let pot = session.spawn_breakable(3, vec![ContainerEntry::new(ItemType::Coin, 7)]);

    session.damage_object(pot, 3).unwrap();
    assert!(matches!(
        world.try_recv().unwrap(),
        Event::World(WorldEvent::ObjectBroken { .. })
    ));

    session.tick(Duration::from_millis(250));
    assert_eq!(session.player().coins(), 7);

    session.tick(Duration::from_millis(250));
    assert_eq!(session.breakable_state(pot), None);
    assert!(matches!(
        world.try_recv().unwrap(),
        Event::World(WorldEvent::ObjectDestroyed { .. })
    ));
}
