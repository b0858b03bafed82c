pub mod supplier_modal;
