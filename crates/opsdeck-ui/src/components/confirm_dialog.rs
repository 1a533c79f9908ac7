use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
  pub title:      String,
  pub message:    String,
  pub on_confirm: Callback<()>,
  pub on_cancel:  Callback<()>
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(
  props: &ConfirmDialogProps
) -> Html {
  let on_confirm = {
    let on_confirm =
      props.on_confirm.clone();
    Callback::from(move |_| {
      on_confirm.emit(());
    })
  };
  let on_cancel = {
    let on_cancel =
      props.on_cancel.clone();
    Callback::from(move |_| {
      on_cancel.emit(());
    })
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="modal-title">{ &props.title }</div>
              <p class="modal-body">{ &props.message }</p>
              <div class="modal-actions">
                  <button class="btn" onclick={on_cancel}>{ "Cancel" }</button>
                  <button class="btn danger" onclick={on_confirm}>{ "Delete" }</button>
              </div>
          </div>
      </div>
  }
}
