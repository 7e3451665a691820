pub mod merchant;
pub mod item;
pub mod invoice;
pub mod invoice_item;
pub mod transaction;

/*
 Merchants own items and invoices. An invoice lists what was sold (invoice_items, priced at the
 time of sale) and how it was paid (transactions). Revenue only counts once a transaction succeeds.
 */
