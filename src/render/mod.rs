//! Rendering contract between the SQL pipeline and the chat message view.
crate::reexport!(block);
crate::reexport!(renderer);
crate::reexport!(response);
