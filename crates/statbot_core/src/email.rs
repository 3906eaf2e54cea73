use crate::{Category, TimeFrame};

/// Builds the text handed to the email drafter.
pub fn build_email_prompt(category: Category, time_frame: TimeFrame, lines: &[String]) -> String {
    format!(
        "Generate a professional email based on the following email. \n\n\
         Dear Sir/Madam, \n\n\
         I am writing to inform you that the data for the {} for the {} is as follows: \n\n\
         {}\n\n\
         Thank you. \n\n\
         Sincerely, \n\n\
         Your Name Here",
        category.key(),
        time_frame.key(),
        lines.join("\n")
    )
}
