use std::fmt::Write;

use postboard_core::PostListEditor;
use postboard_core::domain::{Post, RowState};

/// Draw the input line and the posts table.
///
/// The row being edited shows the draft values in brackets; every other
/// row shows what was last loaded or saved.
pub fn render(editor: &PostListEditor) -> String {
    let inputs = editor.inputs();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "views: [{}]  title: [{}]  image: [{}]  (add)",
        inputs.views, inputs.title, inputs.image
    );
    out.push('\n');

    let rows: Vec<[String; 5]> = editor
        .posts()
        .iter()
        .map(|post| match editor.row_state(post.id) {
            Some(RowState::Editing) => {
                let draft = editor.draft().post().unwrap_or(post);
                cells(draft, true)
            }
            _ => cells(post, false),
        })
        .collect();

    let show_image = rows.iter().any(|row| !row[3].is_empty());
    let header = [
        "id".to_string(),
        "title".to_string(),
        "views".to_string(),
        "image".to_string(),
        "action".to_string(),
    ];

    let mut widths = [0usize; 5];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let columns: Vec<usize> = if show_image {
        vec![0, 1, 2, 3, 4]
    } else {
        vec![0, 1, 2, 4]
    };

    let line = |row: &[String; 5]| -> String {
        columns
            .iter()
            .map(|&i| format!("{:<width$}", row[i], width = widths[i]))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let _ = writeln!(out, "{}", line(&header));
    let _ = writeln!(
        out,
        "{}",
        columns
            .iter()
            .map(|&i| "-".repeat(widths[i]))
            .collect::<Vec<_>>()
            .join("-+-")
    );

    if rows.is_empty() {
        let _ = writeln!(out, "(no posts)");
    }
    for row in &rows {
        let _ = writeln!(out, "{}", line(row));
    }

    out
}

fn cells(post: &Post, editing: bool) -> [String; 5] {
    let image = post.image.clone().unwrap_or_default();
    if editing {
        [
            post.id.to_string(),
            format!("[{}]", post.title),
            format!("[{}]", post.views),
            format!("[{image}]"),
            "delete edit save *".to_string(),
        ]
    } else {
        [
            post.id.to_string(),
            post.title.clone(),
            post.views.to_string(),
            image,
            "delete edit save".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use postboard_core::domain::{PostField, PostId, Views};
    use postboard_infra::InMemoryPostResource;

    use super::*;

    fn editor(posts: Vec<Post>) -> PostListEditor {
        PostListEditor::with_posts(Arc::new(InMemoryPostResource::new()), posts)
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let editor = editor(vec![
            Post::new(PostId(1), "A", Views::from(5), None),
            Post::new(PostId(2), "Longer title", Views::from_input("lots"), None),
        ]);

        let out = render(&editor);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[2], "id | title        | views | action");
        assert_eq!(lines[4], "1  | A            | 5     | delete edit save");
        assert_eq!(lines[5], "2  | Longer title | lots  | delete edit save");
        assert!(!out.contains("image |"));
    }

    #[test]
    fn test_editing_row_shows_draft() {
        let mut editor = editor(vec![
            Post::new(PostId(1), "A", Views::from(5), None),
            Post::new(PostId(2), "B", Views::from(6), None),
        ]);
        editor.begin_edit_by_id(PostId(2)).unwrap();
        editor.edit_field(PostField::Title, "B2").unwrap();

        let out = render(&editor);

        assert!(out.contains("[B2]"));
        assert!(out.contains("[6]"));
        assert!(out.contains("delete edit save *"));
        assert!(out.lines().any(|l| l.starts_with("1  | A ")));
    }

    #[test]
    fn test_image_column_appears_when_used() {
        let editor = editor(vec![Post::new(
            PostId(1),
            "A",
            Views::from(5),
            Some("http://img/a.png".into()),
        )]);

        let out = render(&editor);
        assert!(out.contains("| image "));
        assert!(out.contains("http://img/a.png"));
    }

    #[test]
    fn test_inputs_and_empty_table() {
        let mut editor = editor(Vec::new());
        editor.set_input(PostField::Views, "10");
        editor.set_input(PostField::Title, "B");

        let out = render(&editor);
        assert!(out.starts_with("views: [10]  title: [B]  image: []  (add)"));
        assert!(out.contains("(no posts)"));
    }
}
