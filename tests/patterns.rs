use design_patterns::builder::{
    ApartmentBuilder, Director, HouseBuilder, HouseStyle, StoneBuilder, WoodBuilder,
};
use design_patterns::factory::{create_factory, create_transport, Store, Transport, SELECTORS};
use design_patterns::PatternError;
use proptest::prelude::*;

// ============================================================================
// Abstract factory
// ============================================================================

#[test]
fn test_every_selector_yields_its_pair() {
    let expected = [
        ("coldWithTruck", Transport::Truck, Store::ColdStore),
        ("hotWithAirPlane", Transport::AirPlane, Store::HotStore),
    ];
    assert_eq!(expected.len(), SELECTORS.len());

    for (selector, transport, store) in expected {
        let factory = create_factory(selector).unwrap();
        assert_eq!(factory.create_transport(), transport, "{selector}");
        assert_eq!(factory.create_store(), store, "{selector}");
    }
}

#[test]
fn test_factory_is_stateless_across_calls() {
    let factory = create_factory("coldWithTruck").unwrap();
    let first = factory.create_pair();
    let second = factory.create_pair();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn test_unknown_selectors_never_yield_a_factory(selector in "\\PC*") {
        prop_assume!(!SELECTORS.contains(&selector.as_str()));
        let result = create_factory(&selector);
        let is_not_found = matches!(result, Err(PatternError::FactoryNotFound { .. }));
        prop_assert!(is_not_found);
    }

    #[test]
    fn test_unknown_transport_kinds_are_errors(kind in "[a-zA-Z]{0,12}") {
        prop_assume!(!Transport::KINDS.contains(&kind.as_str()));
        let result = create_transport(&kind);
        let is_unknown = matches!(result, Err(PatternError::UnknownTransport { .. }));
        prop_assert!(is_unknown);
    }

    #[test]
    fn test_descriptions_are_constant(calls in 1usize..20) {
        for _ in 0..calls {
            prop_assert_eq!(Transport::Truck.delivery(), "use truck delivery...");
            prop_assert_eq!(Store::HotStore.store(), "use hot store...");
        }
    }
}

// ============================================================================
// Builder + director
// ============================================================================

#[test]
fn test_wood_house_through_director() {
    let mut director = Director::new(Box::new(WoodBuilder::new()));
    assert_eq!(
        director.build_house().to_string(),
        "Door:red wood,Wall:white wall,Window:wood window,Heating:simonzi,\
         yard size:10,yard name:wood yard"
    );
}

#[test]
fn test_rebind_has_no_leakage() {
    let mut director = Director::new(Box::new(StoneBuilder::new()));
    let stone = director.build_house();

    director.set_builder(Box::new(ApartmentBuilder::new()));
    let apartment = director.build_house();

    for part in [&apartment.wall, &apartment.door, &apartment.window, &apartment.heating] {
        let part = part.as_deref().unwrap();
        assert!(
            ![&stone.wall, &stone.door, &stone.window, &stone.heating]
                .iter()
                .any(|p| p.as_deref() == Some(part)),
            "{part} leaked from the stone builder"
        );
    }
    assert!(apartment.yard.is_none());
    assert!(!apartment.to_string().contains("yard"));
}

#[test]
fn test_manual_builder_without_director() {
    let mut builder = WoodBuilder::new();
    builder.build_wall();
    builder.build_heating();
    let house = builder.house();
    assert_eq!(house.to_string(), "Door:,Wall:white wall,Window:,Heating:simonzi");
}

#[test]
fn test_style_builders_match_concrete_builders() {
    let mut by_style = Director::new(HouseStyle::Stone.builder());
    let mut by_type = Director::new(Box::new(StoneBuilder::new()));
    assert_eq!(by_style.build_house(), by_type.build_house());
}
