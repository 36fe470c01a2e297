// benches/parse.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use rec_schedules::{
    clean_activity_name, cut_date_range, parse_clock_range, parse_date_range,
};

// Cell text as it shows up in scraped schedule tables.
const CLOCK_CELLS: &[&str] = &[
    "7 - 8:30 am", "6:30 - 9 pm", "noon - 1 pm", "5pm-3am", "0930-1100",
    "17h00-19h30", "3:12am am-11:23am", "01:00 - - 02:00", "Noon to Midnight", "closed",
];

const CAPTIONS: &[&str] = &[
    "Bearbrook Outdoor Pool - swimming - August 2 to 4",
    "Jack Purcell - swim and aquafit - January 6 to April 6",
    "Lane swim schedule - starting September 3",
    "Arena - public skating - until June 20, 2025",
    "Pool - August 30 and 31",
    "Fitness centre schedule",
];

const ACTIVITIES: &[&str] = &[
    "Lane Swim - reduced capacity", "50 + Swim", "Aquafit (18+) *Reservations required",
    "Pickup Basketball - courts", "Public Skating®", "Swimming - ages 12 + - deep end",
];

fn bench_parse(c: &mut Criterion) {
    c.bench_function("clock_range", |b| {
        b.iter(|| {
            let n = CLOCK_CELLS.iter().filter_map(|s| parse_clock_range(black_box(s))).count();
            black_box(n)
        })
    });

    c.bench_function("date_range", |b| {
        b.iter(|| {
            let n = CAPTIONS
                .iter()
                .filter_map(|s| cut_date_range(black_box(s)))
                .filter_map(|(_, phrase)| parse_date_range(&phrase))
                .count();
            black_box(n)
        })
    });

    c.bench_function("activity_name", |b| {
        b.iter(|| {
            let n: usize = ACTIVITIES.iter().map(|s| clean_activity_name(black_box(s)).len()).sum();
            black_box(n)
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
