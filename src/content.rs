//! The guide's fixed content.
//!
//! Every collection is a `'static` slice. Slice order is print order.

use serde::Serialize;

/// A named block of explanatory text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub topic: &'static str,
    pub text: &'static str,
}

/// A question with one sample answer. Answers are shown, never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    pub question: &'static str,
    pub sample_answer: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSet {
    pub topic: &'static str,
    pub items: &'static [QuizItem],
}

/// Practice prompts under a label. Labels need not match a lesson topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExerciseSet {
    pub topic: &'static str,
    pub prompts: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub url: &'static str,
}

const fn lesson(topic: &'static str, text: &'static str) -> Lesson {
    Lesson { topic, text }
}

const fn quiz(question: &'static str, sample_answer: &'static str) -> QuizItem {
    QuizItem {
        question,
        sample_answer,
    }
}

pub const LESSONS: &[Lesson] = &[
    lesson(
        "Introduction to Databases",
        "A database is an organized collection of structured information, typically stored electronically.",
    ),
    lesson(
        "Types of Databases",
        "Relational, NoSQL, In-memory, Cloud databases.",
    ),
    lesson(
        "Database Models",
        "Hierarchical, Network, Relational, Object-oriented.",
    ),
    lesson(
        "SQL Basics",
        "SQL is used for managing relational databases. Key commands: SELECT, INSERT, UPDATE, DELETE, CREATE, DROP.",
    ),
    lesson(
        "Database Normalization",
        "Normalization reduces redundancy and improves data integrity. 1NF, 2NF, 3NF.",
    ),
    lesson(
        "Transactions & ACID Properties",
        "Atomicity, Consistency, Isolation, Durability.",
    ),
    lesson(
        "Indexes",
        "Indexes speed up data retrieval. Types: primary, secondary, unique, composite.",
    ),
    lesson("Joins in SQL", "INNER, LEFT, RIGHT, FULL JOINs."),
    lesson(
        "Backup & Recovery",
        "Backup: copying data. Recovery: restoring data after failure.",
    ),
    lesson(
        "Security",
        "Authentication, Authorization, Encryption, Access Control.",
    ),
    lesson(
        "Sample SQL Queries",
        "CREATE TABLE, INSERT, SELECT, UPDATE, DELETE.",
    ),
    lesson(
        "Advanced SQL Concepts",
        "Subqueries, window functions, stored procedures, views, triggers.",
    ),
    lesson(
        "ER Diagrams & Database Design",
        "Entities, relationships, attributes, keys, design steps.",
    ),
    lesson(
        "Data Modeling & Schema Design",
        "Normalization vs. denormalization, schema evolution, best practices.",
    ),
    lesson(
        "Transactions in Depth",
        "Isolation levels, locking, concurrency control.",
    ),
    lesson(
        "Indexing & Performance Tuning",
        "B-tree, hash, bitmap, full-text indexes, query optimization.",
    ),
    lesson(
        "Backup, Restore, & Disaster Recovery",
        "Full, incremental, differential backups, restore procedures, disaster recovery planning.",
    ),
    lesson(
        "Security Best Practices",
        "Roles, permissions, encryption, auditing, monitoring.",
    ),
    lesson(
        "NoSQL Deep Dive",
        "Document, key-value, column-family, graph databases, CAP theorem, use cases.",
    ),
    lesson(
        "Real-World Case Studies",
        "E-commerce, social network, banking system databases.",
    ),
];

pub const QUIZZES: &[QuizSet] = &[
    QuizSet {
        topic: "Introduction to Databases",
        items: &[
            quiz(
                "What is a database?",
                "An organized collection of structured information or data.",
            ),
            quiz(
                "Name one purpose of a database.",
                "Efficient data storage, retrieval, and management.",
            ),
        ],
    },
    QuizSet {
        topic: "SQL Basics",
        items: &[
            quiz("Which SQL command is used to retrieve data?", "SELECT"),
            quiz(
                "Write a SQL query to select all students older than 18.",
                "SELECT * FROM students WHERE age > 18;",
            ),
        ],
    },
    QuizSet {
        topic: "Database Normalization",
        items: &[
            quiz(
                "What is the goal of normalization?",
                "Reduce redundancy and improve data integrity.",
            ),
            quiz("Name the first three normal forms.", "1NF, 2NF, 3NF"),
        ],
    },
];

pub const EXERCISES: &[ExerciseSet] = &[
    ExerciseSet {
        topic: "SQL Basics",
        prompts: &[
            "Write a query to find the top 3 oldest students.",
            "Create a table for courses and enrollments with foreign keys.",
        ],
    },
    ExerciseSet {
        topic: "NoSQL",
        prompts: &[
            "Model a blog platform in MongoDB.",
            "Design a key-value store for session management.",
        ],
    },
    ExerciseSet {
        topic: "Security",
        prompts: &[
            "Set up user roles for a database.",
            "Plan a backup strategy for a critical system.",
        ],
    },
];

pub const PROJECTS: &[&str] = &[
    "Design and implement an e-commerce database (products, orders, customers, inventory).",
    "Create a social network schema (users, posts, comments, relationships).",
    "Build a banking system database (accounts, transactions, audits, security).",
];

pub const RESOURCES: &[Resource] = &[
    Resource {
        name: "SQL Tutorial",
        url: "https://www.w3schools.com/sql/",
    },
    Resource {
        name: "Database Normalization",
        url: "https://en.wikipedia.org/wiki/Database_normalization",
    },
    Resource {
        name: "ACID Properties",
        url: "https://en.wikipedia.org/wiki/ACID",
    },
    Resource {
        name: "NoSQL Databases",
        url: "https://www.mongodb.com/nosql-explained",
    },
    Resource {
        name: "PostgreSQL Documentation",
        url: "https://www.postgresql.org/docs/",
    },
    Resource {
        name: "MongoDB University",
        url: "https://university.mongodb.com/",
    },
    Resource {
        name: "SQLZoo Practice",
        url: "https://sqlzoo.net/",
    },
    Resource {
        name: "Database Design Patterns",
        url: "https://www.databasedesignpatterns.com/",
    },
];

/// Look up a lesson by topic.
pub fn lesson_text(topic: &str) -> Option<&'static str> {
    LESSONS.iter().find(|l| l.topic == topic).map(|l| l.text)
}
