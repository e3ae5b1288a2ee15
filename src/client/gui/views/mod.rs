pub mod city_form;
