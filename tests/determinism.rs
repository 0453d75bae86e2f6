use glider::sim::fold;
use glider::{FlightState, Target, Transition, Vector, advance};

fn pointer_path(frame: usize) -> Target {
    let t = frame as f64 / 30.0;
    Target::new(
        Vector::new(480.0 + 200.0 * t.cos(), 320.0 + 150.0 * (2.0 * t).sin()),
        Vector::new(480.0, 320.0),
    )
}

#[test]
fn advance_deterministic() {
    let state = FlightState::initial();
    let target = Target::relative(Vector::new(12.0, -7.0));
    let a = advance(state, target);
    let b = advance(state, target);
    assert_eq!(a, b);
}

#[test]
fn long_flight_deterministic() {
    let results: Vec<_> = (0..5)
        .map(|_| {
            let transitions = (0..600).map(|frame| {
                if frame % 97 == 0 {
                    Transition::ToggleDebug
                } else {
                    Transition::Frame(pointer_path(frame))
                }
            });
            fold(FlightState::initial(), transitions)
        })
        .collect();

    for r in &results[1..] {
        assert_eq!(results[0], *r);
    }
    assert!(results[0].position.x.is_finite() && results[0].position.y.is_finite());
}
