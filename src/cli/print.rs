//! Non-interactive output: fetch one list and print it.
//!
//! ```text
//! b                              Разное Бред
//!
//! 12345 Subject
//!         comment line one
//!         line two
//!
//! 12345 01/01/24 Пнд 12:00:00 cat.png /b/src/12345/1.png 1.png
//!         comment
//! ```

use crossterm::style::Stylize;
use std::io::Write;

use crate::markup::format_html;
use crate::models::{Board, Image, Post, Thread};
use crate::traits::BoardFetcher;
use crate::ui::board_row;

use super::args::CliCommand;
use super::CliError;

pub fn format_board_row(board: &Board) -> String {
    board_row(board)
}

pub fn format_thread(thread: &Thread) -> String {
    format!(
        "{} {}\n\t{}",
        thread.id.as_str().cyan().bold(),
        thread.subject,
        format_html(&thread.comment_excerpt, true)
    )
}

/// Images of a post, one per line.
pub fn format_images(images: &[Image]) -> String {
    images
        .iter()
        .map(|image| {
            format!(
                "{} {} {}",
                image.full_name.as_str().yellow().bold(),
                image.path,
                image.name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_post(post: &Post) -> String {
    format!(
        "{} {} {}\n\t{}",
        post.id.to_string().cyan().bold(),
        post.date.as_str().green().bold(),
        format_images(&post.images),
        format_html(&post.comment, true)
    )
}

pub fn write_boards<W: Write>(out: &mut W, boards: &[Board]) -> std::io::Result<()> {
    for board in boards {
        writeln!(out, "{}", format_board_row(board))?;
    }
    Ok(())
}

pub fn write_threads<W: Write>(out: &mut W, threads: &[Thread]) -> std::io::Result<()> {
    for thread in threads {
        writeln!(out, "{}", format_thread(thread))?;
    }
    Ok(())
}

pub fn write_posts<W: Write>(out: &mut W, posts: &[Post]) -> std::io::Result<()> {
    for post in posts {
        writeln!(out, "{}", format_post(post))?;
    }
    Ok(())
}

/// Fetch what `command` names and print it to `out`.
///
/// Commands that are not queries print nothing.
pub async fn run_query<F, W>(fetcher: &F, command: &CliCommand, out: &mut W) -> Result<(), CliError>
where
    F: BoardFetcher + ?Sized,
    W: Write,
{
    match command {
        CliCommand::ListBoards => write_boards(out, &fetcher.fetch_boards().await?)?,
        CliCommand::ListThreads { board } => {
            write_threads(out, &fetcher.fetch_threads(board).await?)?
        }
        CliCommand::ListPosts { board, thread } => {
            write_posts(out, &fetcher.fetch_posts(board, *thread).await?)?
        }
        CliCommand::RunTui | CliCommand::Version | CliCommand::Help => {}
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::ChanApi;
    use crate::error::FetchError;
    use serde_json::json;

    #[test]
    fn test_format_thread() {
        let thread = Thread::new("12345", "Тема", "first<br>second &amp; <i>third</i>");
        let text = format_thread(&thread);
        assert!(text.contains("12345"));
        assert!(text.contains(" Тема\n\tfirst\n\tsecond & third"));
    }

    #[test]
    fn test_format_post_with_images() {
        let post = Post::new(7, "hi", "01/01/24").with_images(vec![
            Image::new("1.png", "cat.png", "/b/src/7/1.png"),
            Image::new("2.png", "dog.png", "/b/src/7/2.png"),
        ]);
        let text = format_post(&post);
        assert!(text.contains("01/01/24"));
        assert!(text.contains("cat.png"));
        assert!(text.contains(" /b/src/7/1.png 1.png\n"));
        assert!(text.ends_with(" /b/src/7/2.png 2.png\n\thi"));
    }

    #[test]
    fn test_format_images_empty() {
        assert_eq!(format_images(&[]), "");
    }

    #[tokio::test]
    async fn test_run_query_boards() {
        let client = MockHttpClient::new();
        let api = ChanApi::with_base_url(client.clone(), "http://test");
        client.set_json(
            &api.boards_url(),
            json!({"a": [{"id": "b", "category": "a", "name": "Бред"}]}),
        );

        let mut out = Vec::new();
        run_query(&api, &CliCommand::ListBoards, &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, format!("{}\n", board_row(&Board::new("b", "a", "Бред"))));
    }

    #[tokio::test]
    async fn test_run_query_empty_thread_is_error() {
        let client = MockHttpClient::new();
        let api = ChanApi::with_base_url(client.clone(), "http://test");
        client.set_json(&api.posts_url("b", 1), json!({"threads": []}));

        let mut out = Vec::new();
        let err = run_query(
            &api,
            &CliCommand::ListPosts {
                board: "b".to_string(),
                thread: 1,
            },
            &mut out,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CliError::Fetch(FetchError::EmptyResult { .. })));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_query_non_query_prints_nothing() {
        let api = ChanApi::new(MockHttpClient::new());
        let mut out = Vec::new();
        run_query(&api, &CliCommand::Help, &mut out).await.unwrap();
        assert!(out.is_empty());
    }
}
