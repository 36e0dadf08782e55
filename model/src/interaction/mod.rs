mod application_command_type;
pub use application_command_type::ApplicationCommandType;

mod application_command_option;
pub use application_command_option::ApplicationCommandOptionType;

mod application_command_option_choice;
pub use application_command_option_choice::{ApplicationCommandOptionChoice, ChoiceValue};

mod interaction;
pub use interaction::{
    ApplicationCommandAutoCompleteInteraction, ApplicationCommandInteraction, Interaction,
    InteractionMetadata, InteractionType, MessageComponentInteraction,
    MessageComponentInteractionData, ModalSubmitInteraction, ModalSubmitInteractionData,
    PingInteraction,
};

mod application_command_interaction_data;
pub use application_command_interaction_data::ApplicationCommandInteractionData;

mod application_command_interaction_data_resolved;
pub use application_command_interaction_data_resolved::ApplicationCommandInteractionDataResolved;

mod application_command_interaction_data_option;
pub use application_command_interaction_data_option::ApplicationCommandInteractionDataOption;

mod interaction_response;
pub use interaction_response::{
    AutocompleteResponse, DeferredResponse, InteractionResponse, InteractionResponseType,
    MessageResponse, ModalResponse, SimpleInteractionResponse,
};

mod interaction_callback_data;
pub use interaction_callback_data::{
    AutocompleteCallbackData, DeferredCallbackData, InteractionCallbackData, ModalCallbackData,
};

mod component;
pub use component::{Component, ComponentType};

mod modal_submit_component;
pub use modal_submit_component::{
    ModalSubmitActionRow, ModalSubmitComponent, ModalSubmitLabel, ModalSubmitSelect,
    ModalSubmitTextDisplay, ModalSubmitTextInput,
};

mod action_row;
pub use action_row::ActionRow;

mod button;
pub use button::{Button, ButtonStyle};

mod select_menu;
pub use select_menu::{SelectDefaultValue, SelectDefaultValueType, SelectMenu, SelectOption};

mod input_text;
pub use input_text::{TextInput, TextStyleType};

mod label;
pub use label::{Label, TextDisplay};
