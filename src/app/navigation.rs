//! Navigation methods for the App.

use super::App;

impl App {
    /// Move selection up in the story list
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move selection down, onto the "Load more" row at most
    pub fn move_down(&mut self) {
        let rows = self.row_count();
        if rows > 0 && self.selected_index < rows - 1 {
            self.selected_index += 1;
            self.mark_dirty();
        }
    }

    pub fn move_to_top(&mut self) {
        self.selected_index = 0;
        self.mark_dirty();
    }

    pub fn move_to_bottom(&mut self) {
        self.selected_index = self.row_count().saturating_sub(1);
        self.mark_dirty();
    }
}
