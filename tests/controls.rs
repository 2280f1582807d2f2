//! Positive-path behavior tests over the sample form fixture

mod common;

use common::{sample_form_page, test_timeouts};
use veneer_oxide::{
    Button, CheckBox, Control, Error, Label, ListBox, RadioButton, Rect, Rgb, Selectable,
    TextArea, TextBox, TextEditable, Toggleable,
};

#[tokio::test]
async fn button_reads_and_actions() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let button = Button::new(page.clone(), "#submitButton").with_timeouts(test_timeouts());

    assert!(button.is_displayed().await);
    assert!(button.is_enabled().await);
    assert_eq!(button.text().await, "Submit");
    assert!(button.has_correct_text("Submit").await);
    assert_eq!(button.css_class().await, "btn btn-primary");
    assert_eq!(button.tooltip().await, "Submit the form");
    assert_eq!(button.bounds().await, Rect::new(40.0, 300.0, 120.0, 36.0));

    button.click().await?;
    button.hover().await?;
    button.focus().await?;
    button.scroll_into_view().await?;
    button.submit().await?;

    let node = page.node("#submitButton").await.unwrap();
    assert!(node.submitted);
    assert_eq!(node.click_count, 1);
    Ok(())
}

#[tokio::test]
async fn checkbox_round_trip() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let checkbox = CheckBox::new(page, "#agreeCheckbox").with_timeouts(test_timeouts());

    assert!(!checkbox.is_checked().await);
    checkbox.check().await?;
    assert!(checkbox.is_checked().await);
    checkbox.toggle().await?;
    assert!(!checkbox.is_checked().await);
    checkbox.uncheck().await?;
    assert!(!checkbox.is_checked().await);
    Ok(())
}

#[tokio::test]
async fn label_metadata() {
    let page = sample_form_page().await;
    let label = Label::new(page, "#emailLabel").with_timeouts(test_timeouts());

    assert_eq!(label.text().await, "Email");
    assert!(label.has_correct_text("email").await);
    assert_eq!(label.for_attribute().await, "email");
    assert_eq!(label.text_color().await, Some(Rgb::new(33, 37, 41)));
    assert_eq!(label.tag_name().await, "label");
}

#[tokio::test]
async fn text_box_enter_and_clear_round_trip() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let text_box = TextBox::new(page, "#userName").with_timeouts(test_timeouts());

    text_box.enter_text("Jane Doe").await?;
    assert_eq!(text_box.text().await, "Jane Doe");

    text_box.append_text(" Jr.").await?;
    assert_eq!(text_box.text().await, "Jane Doe Jr.");

    text_box.clear().await?;
    assert_eq!(text_box.text().await, "");

    assert_eq!(text_box.placeholder().await, "Full name");
    assert_eq!(text_box.max_length().await, 64);
    assert!(!text_box.is_read_only().await);
    Ok(())
}

#[tokio::test]
async fn text_area_accepts_multiline_input() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let area = TextArea::new(page, "#commentsArea").with_timeouts(test_timeouts());

    area.enter_text("first\nsecond").await?;
    assert_eq!(area.text().await, "first\nsecond");

    area.press_enter().await?;
    area.press_tab().await?;
    Ok(())
}

#[tokio::test]
async fn list_box_selection_flow() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let list = ListBox::new(page, "#colorSelect").with_timeouts(test_timeouts());

    // browser default selection is the first option
    assert_eq!(list.selected_text().await, "Red");

    let options = list.available_options().await;
    assert_eq!(options.len(), 7);
    assert_eq!(options[2], "Green");
    assert!(list.is_option_available("Red").await);
    assert!(!list.is_option_available("MarsGreen").await);

    list.select_by_index(2).await?;
    assert_eq!(list.selected_text().await, "Green");

    list.select_by_text("Blue").await?;
    assert_eq!(list.selected_text().await, "Blue");
    Ok(())
}

#[tokio::test]
async fn list_box_rejects_out_of_range_index() {
    let page = sample_form_page().await;
    let list = ListBox::new(page, "#colorSelect").with_timeouts(test_timeouts());

    let err = list.select_by_index(7).await.unwrap_err();
    match err {
        Error::IndexOutOfRange { index, count } => {
            assert_eq!(index, 7);
            assert_eq!(count, 7);
        }
        other => panic!("expected IndexOutOfRange, got {other}"),
    }

    // the failed call left the selection alone
    assert_eq!(list.selected_text().await, "Red");
}

#[tokio::test]
async fn radio_button_selection() -> anyhow::Result<()> {
    let page = sample_form_page().await;
    let radio = RadioButton::new(page, "#maleRadio").with_timeouts(test_timeouts());

    assert!(!radio.is_selected().await);
    radio.select().await?;
    assert!(radio.is_selected().await);
    assert_eq!(radio.group_name().await, "gender");
    assert_eq!(radio.value().await, "male");
    Ok(())
}

#[tokio::test]
async fn independent_wrappers_share_no_state() -> anyhow::Result<()> {
    // two separate pages, one wrapper each; actions on one must not leak
    let page_a = sample_form_page().await;
    let page_b = sample_form_page().await;

    let box_a = TextBox::new(page_a, "#userName").with_timeouts(test_timeouts());
    let box_b = TextBox::new(page_b, "#userName").with_timeouts(test_timeouts());

    box_a.enter_text("only a").await?;
    assert_eq!(box_a.text().await, "only a");
    assert_eq!(box_b.text().await, "");
    Ok(())
}
