#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod case_list_tests;




#[cfg(test)]
mod http_contract_tests;
