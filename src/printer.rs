//! Renders the study guide as plain text.

use std::io::{self, Write};

use crate::content::{EXERCISES, LESSONS, PROJECTS, QUIZZES, RESOURCES};

pub const TITLE: &str = "Database Tutor: All-in-One Study Guide";

/// Write the whole guide to `out`.
///
/// Sections come in a fixed order: lessons, exercises, projects, quizzes,
/// resources, then the closing marker. Output depends on nothing but the
/// content tables, so two calls always write the same bytes.
pub fn render_guide<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== {TITLE} ===\n")?;
    for lesson in LESSONS {
        writeln!(out, "\n--- {} ---\n{}", lesson.topic, lesson.text)?;
    }

    writeln!(out, "\n=== Practice Exercises ===")?;
    for set in EXERCISES {
        writeln!(out, "\n{} Exercises:", set.topic)?;
        for prompt in set.prompts {
            writeln!(out, "- {prompt}")?;
        }
    }

    writeln!(out, "\n=== Mini-Projects ===")?;
    for project in PROJECTS {
        writeln!(out, "- {project}")?;
    }

    writeln!(out, "\n=== Quizzes (Sample Questions) ===")?;
    for set in QUIZZES {
        writeln!(out, "\n{} Quizzes:", set.topic)?;
        for item in set.items {
            writeln!(out, "Q: {}", item.question)?;
            writeln!(out, "Sample answer: {}\n", item.sample_answer)?;
        }
    }

    writeln!(out, "\n=== Additional Resources ===")?;
    for resource in RESOURCES {
        writeln!(out, "- {}: {}", resource.name, resource.url)?;
    }

    writeln!(out, "\n=== End of Guide ===")?;
    Ok(())
}

/// The guide as a `String`.
pub fn guide_text() -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_guide(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
