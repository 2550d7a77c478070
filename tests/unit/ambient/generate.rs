use super::*;
use crate::foundation::rng::Rng64;

fn within((lo, hi): (f64, f64), v: f64) -> bool {
    v >= lo && v < hi
}

fn delay_ok(t: Timing, window: f64) -> bool {
    t.delay_s <= 0.0 && t.delay_s > -window
}

#[test]
fn default_counts_per_kind() {
    let layer = AmbientLayer::generate(&mut Rng64::new(11));
    assert_eq!(layer.batch(AmbientKind::Orb).len(), 20);
    assert_eq!(layer.batch(AmbientKind::Star).len(), 30);
    assert_eq!(layer.batch(AmbientKind::Cloud).len(), 6);
    assert_eq!(layer.batch(AmbientKind::Mote).len(), 50);
    assert_eq!(layer.batch(AmbientKind::Ember).len(), 35);
    assert_eq!(layer.batch(AmbientKind::Heart).len(), 40);
    assert_eq!(layer.len(), 181);
    assert!(!layer.is_empty());
}

#[test]
fn ids_are_sequential_and_kinds_match() {
    let mut rng = Rng64::new(3);
    for kind in AmbientKind::ALL {
        let batch = generate(kind, 12, &mut rng);
        assert_eq!(batch.len(), 12);
        for (i, e) in batch.iter().enumerate() {
            assert_eq!(e.id() as usize, i);
            assert_eq!(e.kind(), kind);
        }
    }
}

#[test]
fn every_attribute_is_in_range() {
    use ranges::*;

    let mut rng = Rng64::new(2024);
    for _ in 0..20 {
        let layer = AmbientLayer::generate(&mut rng);
        for batch in layer.batches() {
            for e in &batch.entities {
                match *e {
                    AmbientEntity::Orb(o) => {
                        assert!(within(PERCENT, o.top) && within(PERCENT, o.left));
                        assert!(within(ORB_SIZE, o.size));
                        assert!(within(ORB_DURATION, o.timing.duration_s));
                        assert!(delay_ok(o.timing, ORB_DELAY_WINDOW));
                    }
                    AmbientEntity::Star(s) => {
                        assert!(within(PERCENT, s.top) && within(PERCENT, s.left));
                        assert!(within(STAR_SIZE, s.size));
                        assert!(within(STAR_DURATION, s.timing.duration_s));
                        assert!(delay_ok(s.timing, STAR_DELAY_WINDOW));
                    }
                    AmbientEntity::Cloud(c) => {
                        assert!(within(CLOUD_BOTTOM, c.bottom));
                        assert!(within(CLOUD_LEFT, c.left));
                        assert!(within(CLOUD_WIDTH, c.width));
                        assert!(within(CLOUD_HEIGHT, c.height));
                        assert!(within(CLOUD_DURATION, c.timing.duration_s));
                        assert!(delay_ok(c.timing, CLOUD_DELAY_WINDOW));
                    }
                    AmbientEntity::Mote(m) => {
                        assert!(within(PERCENT, m.top) && within(PERCENT, m.left));
                        assert!(within(MOTE_SIZE, m.size));
                        assert!(within(MOTE_OPACITY, m.target_opacity));
                        assert!(within(MOTE_DURATION, m.timing.duration_s));
                        assert!(delay_ok(m.timing, MOTE_DELAY_WINDOW));
                    }
                    AmbientEntity::Ember(em) => {
                        assert!(within(PERCENT, em.left));
                        assert!(within(EMBER_SIZE, em.size));
                        assert!(within(EMBER_SWAY, em.sway));
                        assert!(within(EMBER_DURATION, em.timing.duration_s));
                        assert!(delay_ok(em.timing, EMBER_DELAY_WINDOW));
                    }
                    AmbientEntity::Heart(h) => {
                        assert!(within(PERCENT, h.left));
                        assert!(within(HEART_SIZE_REM, h.size_rem));
                        assert!(within(HEART_OPACITY, h.opacity));
                        assert!(within(HEART_DURATION, h.timing.duration_s));
                        assert!(delay_ok(h.timing, HEART_DELAY_WINDOW));
                    }
                }
            }
        }
    }
}

#[test]
fn same_seed_reproduces_layer() {
    let a = AmbientLayer::generate(&mut Rng64::new(77));
    let b = AmbientLayer::generate(&mut Rng64::new(77));
    assert_eq!(a, b);
    let c = AmbientLayer::generate(&mut Rng64::new(78));
    assert_ne!(a, c);
}

#[test]
fn delays_desynchronize_cycles() {
    let batch = generate(AmbientKind::Mote, 50, &mut Rng64::new(5));
    let mut delays = batch
        .iter()
        .map(|e| e.timing().delay_s)
        .collect::<Vec<_>>();
    delays.sort_by(f64::total_cmp);
    delays.dedup();
    assert!(delays.len() > 45);
}

#[test]
fn orb_tints_cover_palette() {
    let batch = generate(AmbientKind::Orb, 200, &mut Rng64::new(8));
    for tint in OrbTint::ALL {
        assert!(
            batch
                .iter()
                .any(|e| matches!(e, AmbientEntity::Orb(o) if o.tint == tint))
        );
    }
}

#[test]
fn layer_serializes_with_kind_tags() {
    let layer = AmbientLayer::generate(&mut Rng64::new(1));
    let json = serde_json::to_string(&layer).unwrap();
    assert!(json.contains("\"kind\":\"orb\""));
    assert!(json.contains("\"kind\":\"ember\""));
    let back: AmbientLayer = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), layer.len());
}

#[test]
fn zero_count_is_empty() {
    assert!(generate(AmbientKind::Cloud, 0, &mut Rng64::new(1)).is_empty());
}
