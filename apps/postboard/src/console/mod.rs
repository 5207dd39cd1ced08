//! Interactive console: read a command per line, apply it to the editor,
//! redraw.
//!
//! Remote failures are never shown here. The editor has already logged
//! them and left its state as it was, so the redrawn table is unchanged.

mod command;
mod render;

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use postboard_core::{EditorError, PostListEditor};

use command::{Command, HELP};
use render::render;

/// What the loop does after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue(Option<String>),
    Quit,
}

/// Run the console until `quit` or end of input.
pub async fn run<R, W>(editor: &mut PostListEditor, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    // Initial fetch, like the page did on mount.
    let _ = editor.load_all().await;
    write!(out, "{}", render(editor))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let note = match line.parse::<Command>() {
            Ok(command) => match apply(editor, command).await {
                Flow::Quit => break,
                Flow::Continue(note) => note,
            },
            Err(e) => Some(format!("{e} (try `help`)")),
        };

        if let Some(note) = note {
            writeln!(out, "{note}")?;
        }
        write!(out, "{}", render(editor))?;
    }

    writeln!(out)?;
    Ok(())
}

async fn apply(editor: &mut PostListEditor, command: Command) -> Flow {
    tracing::debug!(?command, "Applying command");

    let note = match command {
        Command::Input(field, value) => {
            editor.set_input(field, value);
            None
        }
        Command::Add => {
            let _ = editor.submit_inputs().await;
            None
        }
        Command::Edit(id) => editor.begin_edit_by_id(id).err().map(usage_note),
        Command::Set(field, value) => editor.edit_field(field, &value).err().map(usage_note),
        Command::Save => {
            if !editor.draft().is_active() {
                Some(usage_note(EditorError::NoActiveEdit))
            } else {
                let _ = editor.save_draft().await;
                None
            }
        }
        Command::Delete(id) => {
            let _ = editor.delete(id).await;
            None
        }
        Command::Reload => {
            let _ = editor.load_all().await;
            None
        }
        Command::Help => Some(HELP.to_string()),
        Command::Redraw => None,
        Command::Quit => return Flow::Quit,
    };

    Flow::Continue(note)
}

/// Front-end mistakes (no such row, nothing being edited) get a hint.
fn usage_note(err: EditorError) -> String {
    err.to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use postboard_core::domain::{Post, PostId, Views};
    use postboard_infra::InMemoryPostResource;

    use super::*;

    fn seeded() -> Arc<InMemoryPostResource> {
        Arc::new(InMemoryPostResource::with_posts(vec![
            Post::new(PostId(1), "A", Views::from(5), None),
            Post::new(PostId(2), "B", Views::from(6), None),
        ]))
    }

    async fn session(resource: Arc<InMemoryPostResource>, script: &str) -> (PostListEditor, String) {
        let mut editor = PostListEditor::new(resource);
        let mut out = Vec::new();
        run(&mut editor, script.as_bytes(), &mut out).await.unwrap();
        (editor, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_loads_on_start_and_quits() {
        let (editor, out) = session(seeded(), "quit\n").await;

        assert_eq!(editor.posts().len(), 2);
        assert!(out.contains("1  | A"));
    }

    #[tokio::test]
    async fn test_add_from_input_line() {
        let resource = seeded();
        let (editor, _) = session(resource.clone(), "views 10\ntitle C\nadd\n").await;

        let expected = Post::new(PostId(3), "C", Views::from(10), None);
        assert_eq!(editor.posts().last(), Some(&expected));
        assert_eq!(resource.snapshot().await.last(), Some(&expected));
        assert_eq!(editor.inputs().title, "");
    }

    #[tokio::test]
    async fn test_edit_set_save() {
        let resource = seeded();
        let (editor, _) =
            session(resource.clone(), "edit 2\nset title B2\nset views 60\nsave\n").await;

        let expected = Post::new(PostId(2), "B2", Views::from(60), None);
        assert_eq!(editor.posts()[1], expected);
        assert_eq!(resource.snapshot().await[1], expected);
        assert!(!editor.draft().is_active());
    }

    #[tokio::test]
    async fn test_switching_rows_abandons_draft() {
        let resource = seeded();
        let (editor, _) = session(resource.clone(), "edit 1\nset title lost\nedit 2\nsave\n").await;

        assert_eq!(resource.snapshot().await[0].title, "A");
        assert_eq!(editor.posts()[0].title, "A");
    }

    #[tokio::test]
    async fn test_delete_row() {
        let resource = seeded();
        let (editor, _) = session(resource.clone(), "delete 1\n").await;

        assert_eq!(editor.posts().iter().map(|p| p.id).collect::<Vec<_>>(), vec![PostId(2)]);
        assert_eq!(resource.snapshot().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_is_silent() {
        // Deleting an id the server does not know fails remotely.
        let resource = seeded();
        let mut editor = PostListEditor::with_posts(
            resource.clone(),
            vec![Post::new(PostId(9), "ghost", Views::from(0), None)],
        );
        let mut out = Vec::new();

        assert_eq!(
            apply(&mut editor, Command::Delete(PostId(9))).await,
            Flow::Continue(None)
        );
        assert_eq!(editor.posts().len(), 1);

        write!(out, "{}", render(&editor)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("ghost"));
    }

    #[tokio::test]
    async fn test_usage_hints() {
        let (_, out) = session(seeded(), "edit 42\nsave\nfrobnicate\n").await;

        assert!(out.contains("No post with id 42"));
        assert!(out.contains("No row is being edited"));
        assert!(out.contains("unknown command `frobnicate` (try `help`)"));
    }
}
