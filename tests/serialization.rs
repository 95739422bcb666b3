use hexboard::{MapModel, MapOptions, MapSize, generate_world};

#[test]
fn generated_map_round_trips_through_json() {
    let options = MapOptions {
        size: MapSize::Duel,
        seed: 314,
        ..MapOptions::default()
    };
    let map = generate_world(&options).unwrap();

    let json = map.to_json().unwrap();
    let restored = MapModel::from_json(&json).unwrap();

    assert_eq!(restored.width(), map.width());
    assert_eq!(restored.height(), map.height());

    for point in map.points() {
        assert_eq!(
            map.tile(point).unwrap(),
            restored.tile(point).unwrap(),
            "tile mismatch at {point}"
        );
    }

    assert_eq!(restored.player_starts, map.player_starts);
    assert_eq!(restored.city_state_starts, map.city_state_starts);
    assert_eq!(restored.continents.len(), map.continents.len());
    assert_eq!(restored.oceans.len(), map.oceans.len());
}

#[test]
fn round_trip_is_stable() {
    let options = MapOptions {
        size: MapSize::Duel,
        seed: 8,
        ..MapOptions::default()
    };
    let map = generate_world(&options).unwrap();

    let once = map.to_json().unwrap();
    let twice = MapModel::from_json(&once).unwrap().to_json().unwrap();
    assert_eq!(once, twice);
}
