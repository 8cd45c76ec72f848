//! Example posts used when nothing has been stored yet.

use chrono::NaiveDate;

use crate::domain::{Media, Post, PostDraft};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// The fixed example collection, in display order.
pub fn example_posts() -> Vec<Post> {
    vec![
        Post::new(
            1,
            date(2025, 5, 20),
            PostDraft::new(
                "Getting Started with Web Development",
                "Alice Smith",
                "Web development is an exciting field that involves building websites and web \
                 applications. It typically involves three main areas: front-end (what users see \
                 and interact with), back-end (server-side logic and databases), and database \
                 management. To get started, you'll want to learn HTML for structure, CSS for \
                 styling, and JavaScript for interactivity. Many online resources and courses are \
                 available to help you on your journey. Don't be afraid to experiment and build \
                 small projects to solidify your understanding. The web is constantly evolving, so \
                 continuous learning is key!",
            )
            .with_media(Media::image(
                "https://via.placeholder.com/800x400/8FBC8F/FFFFFF?Text=HTML+CSS+JS",
            )),
        ),
        Post::new(
            2,
            date(2025, 5, 22),
            PostDraft::new(
                "The Power of CSS Flexbox for Layouts",
                "Bob Johnson",
                "CSS Flexbox is a one-dimensional layout method for arranging items in rows or \
                 columns. It's incredibly powerful for creating responsive designs and distributing \
                 space among items in a container. With properties like `justify-content`, \
                 `align-items`, `flex-grow`, and `flex-shrink`, you can control the alignment, \
                 sizing, and order of your elements with remarkable flexibility. Understanding \
                 Flexbox is a game-changer for modern web design, simplifying many layout \
                 challenges that were once complex with traditional CSS floats and positioning. It \
                 makes centering items a breeze!",
            )
            .with_media(Media::image(
                "https://via.placeholder.com/800x400/A2D2FF/000000?Text=Flexbox+Layout",
            )),
        ),
        Post::new(
            3,
            date(2025, 5, 25),
            PostDraft::new(
                "Understanding JavaScript Closures: A Deep Dive",
                "Charlie Brown",
                "A closure in JavaScript is a function that has access to its outer function's \
                 scope even after the outer function has finished executing. This concept is \
                 fundamental to many advanced JavaScript patterns, including module patterns and \
                 private variables. Closures allow you to create functions that 'remember' their \
                 environment, making them incredibly useful for data encapsulation and creating \
                 more robust, maintainable code. While initially a bit tricky to grasp, mastering \
                 closures opens up a new world of possibilities in JavaScript programming. They \
                 are often used in event handlers and callbacks.",
            )
            .with_media(Media::video("https://www.w3schools.com/html/mov_bbb.mp4")),
        ),
        Post::new(
            4,
            date(2025, 5, 26),
            PostDraft::new(
                "Modern JavaScript Features You Should Know",
                "Diana Prince",
                "ECMAScript 6 (ES6) and later versions introduced many powerful features to \
                 JavaScript, making the language more expressive and enjoyable to write. These \
                 include arrow functions for concise syntax, template literals for easier string \
                 manipulation, destructuring assignment for extracting values from arrays and \
                 objects, and Promises/async-await for handling asynchronous operations more \
                 cleanly. Keeping up with these modern features is crucial for writing efficient \
                 and maintainable JavaScript code in today's development landscape. Embracing \
                 them will significantly improve your productivity.",
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_have_unique_ids_and_long_bodies() {
        let posts = example_posts();
        let mut ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(posts.iter().all(|p| p.content.chars().count() > 250));
        assert_eq!(posts[3].media, None);
    }
}
