// tests/activity.rs
//
// Tests for activity name cleaning.
//
use rec_schedules::parse::clean_activity_name;
use rec_schedules::parse::activity::cut_reservation_requirement;

#[test]
fn age_minimum_moves_to_the_end() {
    assert_eq!(clean_activity_name("50 + Swim"), "swim 50+");
    assert_eq!(clean_activity_name("Aquafit (18+) *Reservations required"), "aquafit 18+");
    assert_eq!(clean_activity_name("Swimming - ages 12 + - deep end"), "swim - deep end 12+");
}

#[test]
fn ambiguous_ages_are_left_alone() {
    assert_eq!(clean_activity_name("Swim 18+ / 50+"), "swim 18+ / 50+");
}

#[test]
fn reduced_capacity_suffix() {
    assert_eq!(clean_activity_name("Lane Swim - reduced capacity"), "lane swim - reduced capacity");
    assert_eq!(
        clean_activity_name("Reduced Capacity Lane Swim 18+"),
        "lane swim 18+ - reduced capacity"
    );
}

#[test]
fn vocabulary() {
    assert_eq!(clean_activity_name("Pickup Basketball - courts"), "pick-up basketball court");
    assert_eq!(clean_activity_name("Public Skating\u{ae}"), "public skate");
    assert_eq!(clean_activity_name("Sport Night"), "sports night");
    assert_eq!(clean_activity_name("AquaLite"), "aqua lite");
}

#[test]
fn reservation_clauses() {
    assert_eq!(clean_activity_name("Lane swim *Reservations not required"), "lane swim");
    assert_eq!(clean_activity_name("Lane swim *bring a lock"), "lane swim *bring a lock");
    assert_eq!(cut_reservation_requirement("swim * requires reservation."), ("swim", Some(true)));
}

#[test]
fn total_on_odd_input() {
    assert_eq!(clean_activity_name(""), "");
    assert_eq!(clean_activity_name("   \u{200b}  "), "");
    assert_eq!(clean_activity_name("reduced"), "- reduced capacity");
}
