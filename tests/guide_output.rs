use database_tutor::content::{lesson_text, EXERCISES, LESSONS, PROJECTS, QUIZZES, RESOURCES};
use database_tutor::printer::{guide_text, render_guide};

// Position of `needle` in `haystack`, asserting it occurs exactly once
fn find_once(haystack: &str, needle: &str) -> usize {
    let count = haystack.matches(needle).count();
    assert_eq!(count, 1, "expected {needle:?} exactly once, found {count}");
    haystack.find(needle).unwrap()
}

fn assert_in_order(guide: &str, needles: &[String]) {
    let positions: Vec<usize> = needles.iter().map(|n| find_once(guide, n)).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "entries out of order: {needles:?}"
    );
}

#[test]
fn sql_basics_lists_key_commands() {
    let guide = guide_text();
    let heading = find_once(&guide, "--- SQL Basics ---\n");
    let body = guide[heading..].lines().nth(1).unwrap();
    assert!(body.contains("SELECT, INSERT, UPDATE, DELETE, CREATE, DROP"));
    assert_eq!(Some(body), lesson_text("SQL Basics"));
}

#[test]
fn every_lesson_printed_once_in_order() {
    let guide = guide_text();
    let headings: Vec<String> = LESSONS
        .iter()
        .map(|l| format!("\n--- {} ---\n{}\n", l.topic, l.text))
        .collect();
    assert_eq!(LESSONS.len(), 20);
    assert_in_order(&guide, &headings);
}

#[test]
fn exercises_projects_quizzes_and_resources_in_order() {
    let guide = guide_text();

    let exercises: Vec<String> = EXERCISES
        .iter()
        .flat_map(|set| {
            std::iter::once(format!("\n{} Exercises:\n", set.topic))
                .chain(set.prompts.iter().map(|p| format!("- {p}\n")))
        })
        .collect();
    assert_in_order(&guide, &exercises);

    let projects: Vec<String> = PROJECTS.iter().map(|p| format!("- {p}\n")).collect();
    assert_in_order(&guide, &projects);

    let quizzes: Vec<String> = QUIZZES
        .iter()
        .flat_map(|set| {
            std::iter::once(format!("\n{} Quizzes:\n", set.topic)).chain(
                set.items
                    .iter()
                    .map(|q| format!("Q: {}\nSample answer: {}\n\n", q.question, q.sample_answer)),
            )
        })
        .collect();
    assert_in_order(&guide, &quizzes);

    let resources: Vec<String> = RESOURCES
        .iter()
        .map(|r| format!("- {}: {}\n", r.name, r.url))
        .collect();
    assert_in_order(&guide, &resources);
}

#[test]
fn sections_follow_fixed_order() {
    let guide = guide_text();
    let sections: Vec<String> = [
        "=== Database Tutor: All-in-One Study Guide ===",
        "=== Practice Exercises ===",
        "=== Mini-Projects ===",
        "=== Quizzes (Sample Questions) ===",
        "=== Additional Resources ===",
        "=== End of Guide ===",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_in_order(&guide, &sections);
    assert!(guide.starts_with("\n=== Database Tutor: All-in-One Study Guide ===\n\n\n--- Introduction to Databases ---\n"));
    assert!(guide.ends_with("\n\n=== End of Guide ===\n"));
}

#[test]
fn rendering_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    render_guide(&mut first).unwrap();
    render_guide(&mut second).unwrap();
    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), guide_text());
}
