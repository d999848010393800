
#[path = "components/dialogs.rs"]
mod dialogs;


#[path = "components/task_list_component.rs"]
mod task_list_component;
